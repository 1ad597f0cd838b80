use anyhow::{anyhow, Context};
use log::info;
use mazegen::codec::{find_start_column, flatten, inflate};
use mazegen::settings::MazeSettings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1).peekable();

    if args.peek().map(String::as_str) == Some("--decode") {
        args.next();
        let encoded = args.next().ok_or(anyhow!("--decode expects an encoded maze"))?;
        let grid = inflate(&encoded).context("Couldn't decode maze")?;
        grid.validate()?;
        let start = find_start_column(&grid)?;
        info!("Decoded a {}x{} maze", grid.rows(), grid.columns());
        println!("rows={} columns={} entrance={}", grid.rows(), grid.columns(), start);
        return Ok(());
    }

    let settings = MazeSettings::from_args(args)?;
    info!("Generating maze with {settings:?}");
    let grid = settings.generate()?;
    println!("{}", flatten(&grid));

    Ok(())
}
