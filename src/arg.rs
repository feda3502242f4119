use clap::{crate_version, Arg, Command};

pub fn build_argparse() -> Command<'static> {
    Command::new("wikipath")
        .about("Finds a short hyperlink path between two Wikipedia articles, possibly across language editions")
        .version(crate_version!())
        .args(&[
            Arg::new("from")
                .required_unless_present("serve")
                .help("Starting article title"),
            Arg::new("to")
                .required_unless_present("serve")
                .help("Target article title"),
            Arg::new("lang")
                .help("Language hint for resolving ambiguous titles, e.g. \"en\""),
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .help("Path to a JSON configuration file"),
            Arg::new("serve")
                .long("serve")
                .takes_value(false)
                .help("Run the HTTP façade instead of a one-shot search"),
            Arg::new("no-warmup")
                .long("no-warmup")
                .takes_value(false)
                .help("Skip the startup connection warm-up pings"),
        ])
}
