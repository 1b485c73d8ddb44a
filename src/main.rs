use clap::{Parser, Subcommand};
use converter::config::Config;
use converter::convert::{self, CONVERSION_TABLE};
use converter::display::{self, DisplayPreferences};
use converter::form::Conversion;
use converter::input;
use converter::logging;
use converter::units::{Category, Unit};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "converter")]
#[command(about = "Convert heights and weights between units", long_about = None)]
struct Cli {
    /// Config file (default: converter.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Decimals shown for converted values (overrides config)
    #[arg(long, global = true)]
    decimals: Option<usize>,

    /// Log lookups and other debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    silent: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units of a category
    Convert {
        /// Category ("height" or "weight")
        category: String,

        /// Source unit symbol (e.g. "cm")
        from: String,

        /// Target unit symbol (e.g. "m")
        to: String,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert a "value unit" expression, inferring the category (e.g. "12 in" ft)
    Quick {
        /// Expression such as "12 in" or "80kg"
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Target unit symbol
        to: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the units of one or all categories
    Units {
        /// Category to list (default: all)
        category: Option<String>,
    },

    /// Print the conversion factor table
    Table {
        /// Category to print (default: all)
        category: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.silent) {
        eprintln!("Warning: failed to initialise logging: {}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;
    let mut prefs = config.display;
    if let Some(decimals) = cli.decimals {
        prefs.decimals = decimals;
    }

    match cli.command {
        Commands::Convert {
            category,
            from,
            to,
            value,
            json,
        } => convert_value(&category, &from, &to, &value, json, &prefs),
        Commands::Quick {
            expression,
            to,
            json,
        } => quick_convert(&expression, &to, json, &prefs),
        Commands::Units { category } => list_units(category.as_deref()),
        Commands::Table { category } => print_table(category.as_deref()),
    }
}

fn convert_value(
    category: &str,
    from: &str,
    to: &str,
    value: &str,
    json: bool,
    prefs: &DisplayPreferences,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = convert::convert_str(category, from, to, value)?;

    // convert_str has already validated every argument
    let conversion = Conversion {
        category: category.parse()?,
        from: from.parse()?,
        to: to.parse()?,
        value: input::parse_value(value)?,
        result,
    };

    print_conversion(&conversion, json, prefs)
}

fn quick_convert(
    expression: &str,
    to: &str,
    json: bool,
    prefs: &DisplayPreferences,
) -> Result<(), Box<dyn std::error::Error>> {
    let (value, from) = input::parse_quantity(expression)?;
    let category = from.category();
    let to: Unit = to.parse().map_err(|_| {
        convert::ConvertError::UnsupportedConversion(format!(
            "unknown {} unit '{}'",
            category, to
        ))
    })?;

    let result = convert::convert(category, from, to, value)?;
    let conversion = Conversion {
        category,
        from,
        to,
        value,
        result,
    };

    print_conversion(&conversion, json, prefs)
}

fn print_conversion(
    conversion: &Conversion,
    json: bool,
    prefs: &DisplayPreferences,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let output = serde_json::json!({
            "conversion": conversion,
            "original": display::format_original(conversion, prefs),
            "converted": display::format_converted(conversion, prefs),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", display::format_conversion(conversion, prefs));
    }

    Ok(())
}

fn selected_categories(
    category: Option<&str>,
) -> Result<Vec<Category>, Box<dyn std::error::Error>> {
    match category {
        Some(c) => Ok(vec![c.parse()?]),
        None => Ok(Category::ALL.to_vec()),
    }
}

fn list_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    for category in selected_categories(category)? {
        println!("{}:", category);
        for unit in category.units() {
            println!("  - {}", unit.label());
        }
    }

    Ok(())
}

fn print_table(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    for category in selected_categories(category)? {
        println!("{}:", category);
        for entry in CONVERSION_TABLE.entries_for(category) {
            println!(
                "  {:>2} -> {:<2} x {}",
                entry.from.symbol(),
                entry.to.symbol(),
                entry.factor
            );
        }
    }

    Ok(())
}
