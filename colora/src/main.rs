use clap::Parser;
use colora_lib::theme_load::colora_theme;
use colora_lib::Theme;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[command(name = "colora")]
#[command(about = "Inspect the selectors and declarations of a CSS theme")]
struct Args {
    /// Theme stylesheet.
    theme: String,

    /// Theme name, defaults to the file stem.
    #[arg(short, long)]
    name: Option<String>,

    /// Only show this selector.
    #[arg(short, long)]
    selector: Option<String>,

    /// Only show this property of the selector.
    #[arg(short, long, requires = "selector")]
    property: Option<String>,
}

fn main() {
    env_logger::init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    let name = args.name.clone().unwrap_or_else(|| {
        Path::new(&args.theme)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let (theme, result) = colora_theme::load_theme(&name, &args.theme);
    if let Some(desc) = result.description() {
        eprintln!("Error loading theme: {}", desc);
        process::exit(1);
    }
    log::info!(
        "loaded theme '{}' with {} selectors",
        theme.name(),
        theme.selector_count()
    );

    let found = match (&args.selector, &args.property) {
        (Some(selector), Some(property)) => match theme.get_declaration(property, selector) {
            Some(value) => {
                println!("{}", value);
                true
            }
            None => {
                eprintln!("'{}' has no '{}' declaration", selector, property);
                false
            }
        },
        (Some(selector), None) => print_selector(&theme, selector),
        (None, _) => {
            for selector in theme.selectors() {
                print_selector(&theme, selector);
            }
            true
        }
    };

    if !found {
        process::exit(1);
    }
}

fn print_selector(theme: &Theme, selector: &str) -> bool {
    let Some(declarations) = theme.get_declarations_for_selector(selector) else {
        eprintln!("Unknown selector: {}", selector);
        return false;
    };

    let mut properties: Vec<_> = declarations.iter().collect();
    properties.sort();

    println!("{} {{", selector);
    for (property, value) in properties {
        println!("  {}: {};", property, value);
    }
    println!("}}");
    true
}
