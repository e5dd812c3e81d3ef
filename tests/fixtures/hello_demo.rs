fn main() {
    println!("hello from the companion file");
}
