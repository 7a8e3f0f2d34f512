fn main() {
    let mut packages = stockroom_dispatch::sample_packages();
    stockroom_dispatch::sort_packages(&mut packages);
    print!("{}", stockroom_dispatch::render_table(&packages));
}
