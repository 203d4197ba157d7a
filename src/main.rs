use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, command, value_parser, Command};
use webprobe::execute::{list_settings, preview_request, run_from_settings, send_request};

fn main() -> Result<()> {
    let cmd = Command::new("webprobe")
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("send")
                .about("compose a request from a url and a detail spec and send it")
                .arg(arg!(<URL> "endpoint spec, \"BASE_URL;USER;PASSWORD\"").required(true))
                .arg(arg!([DETAIL] "request spec, \"METHOD;PATH;MEDIA_TYPE;BODY\"")),
        )
        .subcommand(
            command!("preview")
                .about("compose a request and print method and url without sending")
                .arg(arg!(<URL> "endpoint spec, \"BASE_URL;USER;PASSWORD\"").required(true))
                .arg(arg!([DETAIL] "request spec, \"METHOD;PATH;MEDIA_TYPE;BODY\"")),
        )
        .subcommand(
            command!("run")
                .about("send a request picked from the settings file")
                .arg(
                    arg!(-s --settings <FILE> "settings file with urls, types and details")
                        .value_parser(value_parser!(PathBuf))
                        .default_value("setting.json"),
                )
                .arg(arg!(-u --url <NAME> "url entry to use, by display name or value").required(false))
                .arg(arg!(-t --"type" <NAME> "type entry to use, by display name or value").required(false))
                .arg(arg!(-d --detail <NAME> "detail entry to use, by display name or value").required(false))
                .arg(arg!(--"no-save" "do not remember this selection")),
        )
        .subcommand(
            command!("endpoints")
                .about("list the configured urls, types and details")
                .arg(
                    arg!(-s --settings <FILE> "settings file with urls, types and details")
                        .value_parser(value_parser!(PathBuf))
                        .default_value("setting.json"),
                ),
        );

    let matches = cmd.get_matches();
    let result = match matches.subcommand() {
        Some(("send", matches)) => send_request(
            matches.get_one::<String>("URL").unwrap(),
            matches.get_one::<String>("DETAIL").map(String::as_str),
        ),
        Some(("preview", matches)) => preview_request(
            matches.get_one::<String>("URL").unwrap(),
            matches.get_one::<String>("DETAIL").map(String::as_str),
        ),
        Some(("run", matches)) => run_from_settings(
            matches.get_one::<PathBuf>("settings").unwrap(),
            matches.get_one::<String>("url").map(String::as_str),
            matches.get_one::<String>("type").map(String::as_str),
            matches.get_one::<String>("detail").map(String::as_str),
            !matches.get_flag("no-save"),
        ),
        Some(("endpoints", matches)) => {
            list_settings(matches.get_one::<PathBuf>("settings").unwrap())
        }
        _ => unreachable!("this should've been prevented"),
    };
    return result;
}
