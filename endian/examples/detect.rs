fn main() {
    env_logger::try_init().ok();

    println!("little_endian: {}", endian::is_little_endian());
    println!("big_endian   : {}", endian::is_big_endian());
}
