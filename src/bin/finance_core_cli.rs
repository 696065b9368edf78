use finance_core::{
    cli::{report_error, run_cli},
    init,
};

fn main() {
    init();

    if let Err(err) = run_cli() {
        report_error(&err);
        std::process::exit(1);
    }
}
