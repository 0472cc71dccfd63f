fn main() {
    let v = 0x11223344u32;
    let s = endian::bswap32(v);

    println!("v    : {v:#x}");
    println!("swap : {s:#x}");
}
