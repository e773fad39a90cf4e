//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `folio_core` linkage and print its version.
//! - Optionally run one search over a publications dataset.

use clap::Parser;
use folio_core::{load_records, CatalogStore, Facet, Publication};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    about = "Filter a publications dataset the way the portfolio catalog does",
    version
)]
struct Args {
    /// Publications JSON file; without it only the core version is printed
    path: Option<PathBuf>,

    /// Free-text search over title, abstract and tags
    search: Option<String>,

    /// Publication type to select (`All` for no constraint)
    facet: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("folio_core version={}", folio_core::core_version());

    let Some(path) = args.path else {
        return ExitCode::SUCCESS;
    };

    let records = match load_records::<Publication>(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = CatalogStore::new(records);
    if let Some(term) = args.search {
        store.set_search_term(term);
    }
    if let Some(facet) = args.facet {
        store.set_facet(Facet::parse_label(&facet));
    }

    let facets = store
        .vocabulary()
        .iter()
        .map(Facet::label)
        .collect::<Vec<_>>();
    println!("facets={}", facets.join(","));

    if let Some(featured) = store.featured() {
        println!("featured {} {}", featured.id, featured.title);
    }
    for publication in store.visible_regular() {
        println!("{} {}", publication.id, publication.title);
    }
    if store.is_empty_result() {
        println!("no results");
    }

    ExitCode::SUCCESS
}
