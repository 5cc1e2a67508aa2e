use clap::Parser;
use langtags::{parse, ParsedTag};

const EXIT_OK: i32 = 0;
const EXIT_ERROR: i32 = 2;

/// A BCP47 language tag checker
///
/// Checks each "tag" against the RFC 5646 syntax. Well-formed tags are
/// echoed in canonical form; ill-formed tags are reported on stderr.
/// The exit status is 0 when every tag is well-formed and 2 otherwise.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Print the decomposed subtag parts of each well-formed tag, one
    /// "part: value" line per non-empty part, instead of the canonical
    /// form
    #[clap(short, long)]
    dump: bool,

    /// Suppress normal output. Ill-formed tags are still reported on
    /// stderr and reflected in the exit status
    #[clap(short, long)]
    quiet: bool,

    /// Language tags to check
    #[clap(value_name = "tag", required = true)]
    tags: Vec<String>,
}

fn dump(parsed: &ParsedTag) {
    match parsed {
        ParsedTag::Normal(tag) => {
            println!("language: {}", tag.language);
            if let Some(script) = &tag.script {
                println!("script: {script}");
            }
            if let Some(region) = &tag.region {
                println!("region: {region}");
            }
            for variant in &tag.variants {
                println!("variant: {variant}");
            }
            for extension in &tag.extensions {
                println!("extension: {extension}");
            }
            for subtag in &tag.private_use {
                println!("privateuse: {subtag}");
            }
        }
        ParsedTag::PrivateUse(subtags) => {
            for subtag in subtags {
                println!("privateuse: {subtag}");
            }
        }
        ParsedTag::Grandfathered(_) => {
            println!("grandfathered: {}", parsed.to_language_tag());
        }
    }
}

fn main() {
    let args = Args::parse();

    let mut status = EXIT_OK;
    for tag in &args.tags {
        match parse(tag) {
            Some(parsed) => {
                if args.quiet {
                    continue;
                }
                if args.dump {
                    dump(&parsed);
                } else {
                    println!("{}", parsed.to_language_tag());
                }
            }
            None => {
                eprintln!("'{tag}' is not a well-formed BCP47 language tag");
                status = EXIT_ERROR;
            }
        }
    }
    std::process::exit(status);
}
