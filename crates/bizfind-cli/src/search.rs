use anyhow::Context;
use bizfind_core::{AppConfig, SearchCriteria};
use bizfind_places::SearchPipeline;

use crate::{render, saved, OutputFormat, SearchArgs};

/// Picks the credential: `--api-key` first, then the configured key.
/// Blank values count as missing.
pub(crate) fn resolve_api_key(flag: Option<&str>, configured: Option<&str>) -> Option<String> {
    flag.into_iter()
        .chain(configured)
        .map(str::trim)
        .find(|k| !k.is_empty())
        .map(str::to_owned)
}

pub(crate) fn criteria_from_args(args: &SearchArgs, api_key: String) -> SearchCriteria {
    SearchCriteria {
        business_type: args.business_type.clone(),
        location: args.location.clone(),
        radius_meters: args.radius,
        min_rating: args.min_rating,
        open_now: args.open_now,
        max_price_level: args.max_price,
        keyword: args.keyword.clone().unwrap_or_default(),
        api_key,
    }
}

/// Run one business search and print the matches.
///
/// # Errors
///
/// Returns an error if no API key is available, if the search fails, or if
/// the results cannot be saved.
pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> anyhow::Result<()> {
    let Some(api_key) = resolve_api_key(
        args.api_key.as_deref(),
        config.google_maps_api_key.as_deref(),
    ) else {
        anyhow::bail!("please provide a Google Maps API key (--api-key or GOOGLE_MAPS_API_KEY)");
    };

    let criteria = criteria_from_args(&args, api_key);
    let pipeline = SearchPipeline::from_app_config(config)?;
    let records = pipeline
        .execute(&criteria)
        .await
        .context("error fetching data")?;

    match args.format {
        OutputFormat::Table => render::print_table(&records),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
        OutputFormat::Csv => render::write_csv(std::io::stdout(), &records)?,
    }

    if args.save {
        let path = &config.saved_searches_path;
        saved::append(path, saved::SavedSearch::new(&criteria, records))?;
        eprintln!("search results saved to {}", path.display());
    }

    Ok(())
}
