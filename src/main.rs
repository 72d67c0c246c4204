use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(err) = sitestamp::app::run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
