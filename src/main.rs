use gaussprob::report::standard_report;

fn main() {
    env_logger::init();

    match standard_report() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
