// Silent on success, like the compile-time checks it mirrors.
fn main() {
    if let Err(err) = hana_sort::self_check::run() {
        eprintln!("{err}");
        panic!("Self-check failed!");
    }
}
