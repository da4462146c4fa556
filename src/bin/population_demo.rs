use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    chainsort::example_apps::run_population_demo(std::env::args().skip(1))
}
