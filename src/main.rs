use bool_trees::read_data::read_dataset;
use bool_trees::report::Report;
use bool_trees::settings::Settings;
use std::error::Error;

fn run<I: IntoIterator<Item = String>>(args: I) -> Result<Report, Box<dyn Error>> {
    let settings = Settings::from_args(args)?;
    let training = read_dataset(settings.get_training_file())?;
    let test = read_dataset(settings.get_test_file())?;
    Ok(Report::generate(&training, &test)?)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(std::env::args()) {
        Ok(report) => print!("{}", report),
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
