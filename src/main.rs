use clap::{Arg, ArgMatches, Command};
use counterfoil::{
    builtin_template, load_payload, load_template, output, render, sample_payload, InputProblem,
    ModuleType, Template,
};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("counterfoil")
        .version(VERSION)
        .propagate_version(true)
        .about("Render printable business documents from placeholder templates.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("render")
                .about("Render a document from a template and a payload")
                .arg(module_arg())
                .arg(template_arg())
                .arg(
                    Arg::new("payload")
                        .long("payload")
                        .value_name("FILE")
                        .required(true)
                        .help("JSON object holding the document's field values."),
                )
                .arg(copies_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("preview")
                .about("Render a template against the built-in sample payload")
                .arg(module_arg())
                .arg(template_arg())
                .arg(copies_arg())
                .arg(output_arg()),
        )
        .get_matches();

    let outcome = match matches.subcommand() {
        Some(("render", submatches)) => run_render(submatches),
        Some(("preview", submatches)) => run_preview(submatches),
        _ => {
            println!("usage: counterfoil [COMMAND] ...");
            println!("Try '--help' for more information.");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(problem) => {
            eprintln!("{}", problem.present());
            ExitCode::FAILURE
        }
    }
}

fn module_arg() -> Arg {
    Arg::new("module")
        .long("module")
        .value_name("TYPE")
        .required(true)
        .help("Document module: sales, purchase, or payment.")
}

fn template_arg() -> Arg {
    Arg::new("template")
        .long("template")
        .value_name("FILE")
        .help(
            "Template file. A .json file is read as a stored template record, \
             anything else as raw HTML. Defaults to the built-in template for \
             the module.",
        )
}

fn copies_arg() -> Arg {
    Arg::new("copies")
        .long("copies")
        .value_name("N")
        .default_value("1")
        .help("Copies per printed page. 1, 2, and 4 get density styling.")
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .value_name("FILE")
        .help("Write the rendered document here instead of standard output.")
}

fn run_render(matches: &ArgMatches) -> Result<(), InputProblem> {
    let module = parse_module(matches)?;
    let template = resolve_template(matches, module)?;

    // clap enforces presence of --payload
    let payload_path = matches
        .get_one::<String>("payload")
        .map(String::as_str)
        .unwrap_or_default();
    let payload = load_payload(Path::new(payload_path))?;

    let copies = parse_copies(matches)?;
    let document = render(&template, &payload, copies);
    write_output(matches, &document)
}

fn run_preview(matches: &ArgMatches) -> Result<(), InputProblem> {
    let module = parse_module(matches)?;
    let template = resolve_template(matches, module)?;
    let payload = sample_payload(module);

    let copies = parse_copies(matches)?;
    let document = render(&template, &payload, copies);
    write_output(matches, &document)
}

fn parse_module(matches: &ArgMatches) -> Result<ModuleType, InputProblem> {
    let given = matches
        .get_one::<String>("module")
        .map(String::as_str)
        .unwrap_or("");
    ModuleType::parse(given).ok_or_else(|| InputProblem::UnknownModuleType(given.to_string()))
}

fn resolve_template(matches: &ArgMatches, module: ModuleType) -> Result<Template, InputProblem> {
    match matches.get_one::<String>("template") {
        Some(path) => load_template(Path::new(path), module),
        None => Ok(builtin_template(module)),
    }
}

fn parse_copies(matches: &ArgMatches) -> Result<u32, InputProblem> {
    let given = matches
        .get_one::<String>("copies")
        .map(String::as_str)
        .unwrap_or("1");
    match given
        .trim()
        .parse::<u32>()
    {
        Ok(copies) if copies >= 1 => Ok(copies),
        _ => Err(InputProblem::InvalidCopyCount(given.to_string())),
    }
}

fn write_output(matches: &ArgMatches, document: &str) -> Result<(), InputProblem> {
    let target = matches
        .get_one::<String>("output")
        .map(Path::new);
    output::write_document(document, target)
}
