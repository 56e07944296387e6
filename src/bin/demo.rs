use slotlist::{logical_values, stderr, Deletion, List, Options, Result};

fn main() -> Result<()> {
    let mut list = List::new(Options::default().logger(stderr()))?;
    list.insert_front(1)?;
    list.insert_front(2)?;
    list.insert_front(3)?;
    println!("after front inserts: {:?}", logical_values(&list));

    if let Deletion::Deleted(value) = list.delete_back()? {
        println!("deleted tail: {}", value);
    }
    println!("take(1) = {}, take(2) = {}", list.take(1)?, list.take(2)?);
    if let Err(e) = list.take(3) {
        println!("take(3) rejected: {}", e);
    }

    list.sort()?;
    println!("sorted, quick mode: {}", list.is_quick());

    let mut out = std::io::stdout().lock();
    list.dump(&mut out)
}
