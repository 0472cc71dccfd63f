use endian::{load_be, load_le, try_store_be, try_store_le};

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> anyhow::Result<()> {
    env_logger::try_init().ok();

    let mut le = [0u8; 4];
    let mut be = [0u8; 4];

    let value = 0xA1B2C3D4u32;

    try_store_le(&mut le, value)?;
    try_store_be(&mut be, value)?;

    println!("value : {value:#x}");
    println!("LE bytes: {}", hex(&le));
    println!("BE bytes: {}", hex(&be));

    println!("load_le: {:#x}", load_le::<u32>(&le));
    println!("load_be: {:#x}", load_be::<u32>(&be));

    Ok(())
}
