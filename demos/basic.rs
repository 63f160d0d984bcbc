use json_records::RecordStore;
use serde_json::json;

fn main() -> Result<(), json_records::Error> {
    let path = std::env::temp_dir().join("json_records_example_basic.json");
    let _ = std::fs::remove_file(&path);
    let store = RecordStore::open(&path)?;

    // create / get
    let ann = store.create(&json!({"name": "Ann", "age": 30}))?;
    let bo = store.create(&json!({"name": "Bo", "team": "infra"}))?;
    println!("created {:?}", ann);
    println!("created {:?}", bo);
    println!("get(2)  = {:?}", store.get(bo.id)?);

    // invalid candidates never reach the file
    match store.create(&json!({"name": "   "})) {
        Err(e) => println!("rejected: {e}"),
        Ok(r) => println!("unexpectedly stored {r:?}"),
    }

    // delete
    println!("deleted {}", store.delete(ann.id)?);
    println!("get(1)  = {:?}", store.get(ann.id).err());
    println!("list    = {:?}", store.list()?);

    println!("on disk:\n{}", std::fs::read_to_string(&path).unwrap_or_default());
    let _ = std::fs::remove_file(&path);
    Ok(())
}
