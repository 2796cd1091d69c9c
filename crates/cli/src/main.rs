use clap::{Parser, Subcommand};
use collaboro_core::{
    catalog_file, query, CatalogRepository, CoreConfig, FilterState, Opportunity, RadiusKm,
    TypeFilter,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "collaboro")]
#[command(about = "Collaboro opportunity catalog CLI")]
struct Cli {
    /// Load the catalog from a YAML file instead of the built-in seed
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all opportunities in the catalog
    List,
    /// Search opportunities with the discovery filters
    Search {
        /// Free-text query (name, neighborhood, description, tasks)
        #[arg(long)]
        query: Option<String>,
        /// Search radius in km (1, 3, 5 or 10)
        #[arg(long, default_value_t = 3)]
        radius: u32,
        /// Type filter: nonprofit, business or all
        #[arg(long = "type", default_value = "nonprofit")]
        type_filter: String,
        /// Hide business listings regardless of the type filter
        #[arg(long)]
        no_business: bool,
    },
    /// Show one opportunity in detail
    Show {
        /// Opportunity identifier
        id: String,
    },
    /// List the recommended service points
    ServicePoints,
    /// Print the loaded catalog as YAML
    Export,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = CoreConfig::new(cli.catalog, false);
    let repository = config.load_catalog()?;

    match cli.command {
        Some(Commands::List) => {
            for opportunity in repository.opportunities() {
                print_summary(opportunity);
            }
        }
        Some(Commands::Search {
            query,
            radius,
            type_filter,
            no_business,
        }) => {
            let filter = FilterState {
                search: query.unwrap_or_default(),
                radius: RadiusKm::try_from_km(radius)?,
                type_filter: type_filter.parse::<TypeFilter>()?,
                include_business_listings: !no_business,
            };
            let visible = query::visible(repository.opportunities(), &filter);
            if visible.is_empty() {
                println!("No opportunities in this radius.");
            } else {
                for opportunity in &visible {
                    print_summary(opportunity);
                }
                println!("{} opportunities in this radius", visible.len());
            }
        }
        Some(Commands::Show { id }) => match repository.resolve(&id) {
            Some(opportunity) => print_detail(opportunity),
            None => return Err(format!("no opportunity with id {id}").into()),
        },
        Some(Commands::ServicePoints) => {
            for point in repository.service_points() {
                println!(
                    "ID: {}, Name: {}, Neighborhood: {}{}",
                    point.id,
                    point.name,
                    point.neighborhood,
                    if point.verified { ", verified" } else { "" }
                );
            }
        }
        Some(Commands::Export) => {
            let catalog = collaboro_core::Catalog {
                opportunities: repository.opportunities().to_vec(),
                service_points: repository.service_points().to_vec(),
            };
            print!("{}", catalog_file::render(&catalog)?);
        }
        None => {
            println!("Use 'collaboro --help' for commands");
        }
    }

    Ok(())
}

fn print_summary(opportunity: &Opportunity) {
    println!(
        "ID: {}, Name: {}, Type: {}, Distance: {} km, Category: {}",
        opportunity.id,
        opportunity.name,
        opportunity.opportunity_type,
        opportunity.distance_km,
        opportunity.primary_category().unwrap_or("-")
    );
}

fn print_detail(opportunity: &Opportunity) {
    println!("{} ({})", opportunity.name, opportunity.id);
    println!(
        "  {} - {} km - {}{}",
        opportunity.neighborhood,
        opportunity.distance_km,
        opportunity.opportunity_type,
        if opportunity.verified { ", verified" } else { "" }
    );
    println!("  Categories: {}", opportunity.categories.join(", "));
    println!("  {}", opportunity.short_description);
    for task in &opportunity.tasks {
        println!("  Task {}: {}", task.id, task.title);
        println!("    {}", task.description);
        println!(
            "    Duration: {}, When: {}{}",
            task.duration,
            task.when,
            if task.youth_friendly {
                ", youth friendly"
            } else {
                ""
            }
        );
    }
}
