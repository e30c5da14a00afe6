use clap::Parser;
use std::str::FromStr;
use tagmatch::application::{
    ConfigService, InitService, ListCatalogService, ReportService, SelectTagsService,
    SoloReportService,
};
use tagmatch::cli::{
    format_catalog, format_report, format_selection, format_solo_report, Cli, Commands,
};
use tagmatch::domain::PersonId;
use tagmatch::error::TagmatchError;
use tagmatch::infrastructure::FileSystemRepository;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TagmatchError> {
    match cli.command {
        Some(Commands::Init { path }) => InitService::execute(&path),
        Some(Commands::Tags { category, describe }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ListCatalogService::new(repo);
            let listings = service.execute(category.as_deref(), describe)?;
            print!("{}", format_catalog(&listings));
            Ok(())
        }
        Some(Commands::Select { person, tags }) => {
            let person = parse_person(&person)?;
            let repo = FileSystemRepository::discover()?;
            let service = SelectTagsService::new(repo);
            let selection = service.add(person, &tags)?;
            println!("Selected {} tag(s) for person {}", tags.len(), person);
            print!("{}", format_selection(person.config_key(), &selection));
            Ok(())
        }
        Some(Commands::Remove { person, tags }) => {
            let person = parse_person(&person)?;
            let repo = FileSystemRepository::discover()?;
            let service = SelectTagsService::new(repo);
            let selection = service.remove(person, &tags)?;
            println!("Removed {} tag(s) from person {}", tags.len(), person);
            print!("{}", format_selection(person.config_key(), &selection));
            Ok(())
        }
        Some(Commands::Show { person }) => {
            let repo = FileSystemRepository::discover()?;
            let config_service = ConfigService::new(repo.clone());
            let service = SelectTagsService::new(repo);
            let persons = match person {
                Some(p) => vec![parse_person(&p)?],
                None => PersonId::BOTH.to_vec(),
            };
            for person in persons {
                let name = config_service.get(person.config_key())?;
                let selection = service.show(person)?;
                print!("{}", format_selection(&name, &selection));
            }
            Ok(())
        }
        Some(Commands::Report { category }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ReportService::new(repo);
            let report = service.execute(category.as_deref())?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Some(Commands::Solo { person }) => {
            let person = parse_person(&person)?;
            let repo = FileSystemRepository::discover()?;
            let service = SoloReportService::new(repo);
            let report = service.execute(person)?;
            print!("{}", format_solo_report(&report));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("person1 = {}", config.person1);
                println!("person2 = {}", config.person2);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: tagmatch config [--list | <key> [<value>]]");
                println!("Valid keys: person1, person2, created");
                Ok(())
            }
        }
        None => {
            println!("tagmatch - Lifestyle tag compatibility reports");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_person(value: &str) -> Result<PersonId, TagmatchError> {
    PersonId::from_str(value).map_err(TagmatchError::Config)
}
