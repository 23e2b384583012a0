use anyhow::Context;
use clap::{command, value_parser, Arg, ArgMatches, Command};
use clock::{resolve_date, Clock, SystemClock};
use log::debug;
use metadata::{parse_date, PostMetadata};
use std::path::PathBuf;

mod clock;
mod generator;
mod metadata;
mod renderer;
mod slug;

fn cli() -> Command {
    command!().args(&[
        Arg::new("title").help("Title of the post").required(true),
        Arg::new("categories")
            .long("categories")
            .help("Categories line of the front matter, written as is")
            .value_name("CATEGORIES"),
        Arg::new("date")
            .long("date")
            .help("Post date: YYYY-MM-DD or YYYY-MM-DD HH:MM:SS. Defaults to now.")
            .value_name("DATE")
            .value_parser(parse_date),
        Arg::new("out_dir")
            .long("out-dir")
            .help("Directory the post is written to. Must exist.")
            .value_name("DIR")
            .value_parser(value_parser!(PathBuf))
            .default_value("."),
    ])
}

fn run(matches: &ArgMatches, clock: &impl Clock) -> anyhow::Result<PathBuf> {
    let title: &String = matches.get_one("title").context("title is required")?;
    let categories = matches
        .get_one::<String>("categories")
        .cloned()
        .unwrap_or_default();
    let date = resolve_date(matches.get_one("date").copied(), clock);
    let out_dir: &PathBuf = matches.get_one("out_dir").context("out_dir has a default")?;

    let metadata = PostMetadata {
        title: title.to_owned(),
        categories,
        date,
    };
    debug!("{metadata:?}");

    let handlebars = renderer::generate_renderer()?;
    generator::generate(&handlebars, &metadata, out_dir)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = cli().get_matches();
    run(&matches, &SystemClock)?;

    Ok(())
}
