use clap::Parser;
use pedia::application::init;
use pedia::cli::{format_search_results, format_title_list, Cli, Commands};
use pedia::error::WikiError;
use pedia::infrastructure::FileSystemStore;
use pedia::logging::{init_logging, Verbosity};
use pedia::router::{Request, Response, Router};

fn main() {
    let cli = Cli::parse();

    init_logging(verbosity(&cli));

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn verbosity(cli: &Cli) -> Verbosity {
    if cli.quiet {
        Verbosity::Quiet
    } else {
        match cli.verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            _ => Verbosity::Trace,
        }
    }
}

/// Discover the wiki root and wrap its store in a router
fn open_router() -> Result<Router<FileSystemStore>, WikiError> {
    Ok(Router::new(FileSystemStore::discover()?))
}

fn run(cli: Cli) -> Result<(), WikiError> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::List => {
            let router = open_router()?;
            if let Response::TitleList(titles) = router.dispatch(&Request::get("/"))? {
                print!("{}", format_title_list(&titles));
            }
            Ok(())
        }

        Commands::View { title } => {
            let router = open_router()?;
            let request = Request::get(format!("/{}", title));
            if let Response::EntryPage(page) = router.dispatch(&request)? {
                print!("{}", page.html);
            }
            Ok(())
        }

        Commands::Search { query } => {
            let router = open_router()?;
            let request = Request::post("/search").with_field("q", query.as_str());
            match router.dispatch(&request)? {
                Response::EntryPage(page) => print!("{}", page.html),
                Response::SearchResults(titles) => {
                    print!("{}", format_search_results(&query, &titles));
                }
                _ => {}
            }
            Ok(())
        }

        Commands::New { title, content } => {
            let router = open_router()?;
            let request = Request::post("/new")
                .with_field("title", title.as_str())
                .with_field("content", content.as_str());
            router.dispatch(&request)?;
            println!("Created entry \"{}\"", title);
            Ok(())
        }

        Commands::Edit { title, content } => {
            let router = open_router()?;
            match content {
                Some(content) => {
                    let request = Request::post(format!("/edit/{}", title))
                        .with_field("content", content.as_str());
                    router.dispatch(&request)?;
                    println!("Saved entry \"{}\"", title);
                }
                None => {
                    // No content given: show the stored source for editing
                    let request = Request::get(format!("/edit/{}", title));
                    if let Response::EditForm { content, .. } = router.dispatch(&request)? {
                        match content {
                            Some(content) => print!("{}", content),
                            None => eprintln!(
                                "No entry named \"{}\" yet; 'pedia edit {} <content>' will create it",
                                title, title
                            ),
                        }
                    }
                }
            }
            Ok(())
        }

        Commands::Random => {
            let router = open_router()?;
            if let Response::EntryPage(page) = router.dispatch(&Request::get("/random"))? {
                print!("{}", page.html);
            }
            Ok(())
        }
    }
}
