mod main_lib;

use main_lib::{init_tracing, load_settings, run, Args};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let args = Args::parse(std::env::args().skip(1))?;
    let settings = load_settings()?;
    let view = run(&args, &settings)?;

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
