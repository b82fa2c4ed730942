use anyhow::{Context, Result};
use geoq::GeoContext;
use geoq::domain::relation::RelationCategory;
use geoq::features::fewshot::{Example, Language, render};
use geoq::kernel::ports::candidate_from_json;
use serde_json::json;
use std::fs;
use std::io::{self, Read, Write};

/// Prints the catalogue, or only the names of one category.
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn relations(ctx: &GeoContext, category: Option<RelationCategory>, out: &mut impl Write) -> Result<()> {
    match category {
        Some(category) => {
            for name in ctx.registry().list(Some(category)) {
                writeln!(out, "{name}")?;
            }
        },
        None => writeln!(out, "{}", ctx.registry().describe_for_prompt().trim_start())?,
    }
    Ok(())
}

/// # Errors
/// Returns an error if the examples cannot be rendered or stdout cannot be written.
pub fn prompt(ctx: &GeoContext, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", ctx.priming()?)?;
    Ok(())
}

/// # Errors
/// Returns an error if the examples cannot be rendered or stdout cannot be written.
pub fn examples(
    ctx: &GeoContext,
    language: Option<Language>,
    category: Option<RelationCategory>,
    out: &mut impl Write,
) -> Result<()> {
    let selected: Vec<&Example> = ctx
        .examples()
        .examples()
        .iter()
        .filter(|e| language.is_none_or(|l| e.language == l))
        .filter(|e| category.is_none_or(|c| e.output.spatial_relation().category == c))
        .collect();

    write!(out, "{}", render(&selected)?)?;
    Ok(())
}

/// Runs the pipeline on a candidate and prints `{ "query": .., "advisories": [..] }`.
///
/// # Errors
/// Returns an error if the input cannot be read, is not a valid candidate, or the
/// pipeline rejects it.
pub fn validate(ctx: &GeoContext, input: &str, out: &mut impl Write) -> Result<()> {
    let raw = read_input(input)?;
    let candidate = candidate_from_json(&raw).with_context(|| format!("Invalid candidate in '{input}'"))?;
    let validated = ctx.validate(candidate)?;

    let advisories: Vec<_> = validated
        .advisories
        .iter()
        .map(|a| json!({ "advisory": a, "message": a.to_string() }))
        .collect();
    let document = json!({ "query": validated.query, "advisories": advisories });

    writeln!(out, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw).context("Failed to read stdin")?;
        Ok(raw)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read '{input}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn context() -> GeoContext {
        GeoContext::builder().build().expect("context")
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("command succeeds");
        String::from_utf8(buf).expect("utf-8")
    }

    #[test]
    fn relations_by_category_lists_names() {
        let ctx = context();
        let text = output(|out| relations(&ctx, Some(RelationCategory::Buffer), out));
        assert_eq!(text, "along\nin_the_heart_of\nnear\non_shores_of\n");
    }

    #[test]
    fn examples_can_be_filtered() {
        let ctx = context();
        let text = output(|out| examples(&ctx, Some(Language::Rm), None, out));
        assert!(text.starts_with("Example 1 (rm): "));
        assert!(!text.contains("Example 2"));
    }

    #[test]
    fn validate_prints_query_and_advisories() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "spatial_relation": {{ "relation": "in_the_heart_of", "category": "buffer" }},
                "reference_location": {{ "name": "Bern" }},
                "buffer_config": {{ "distance_m": -8000, "buffer_from": "boundary", "inferred": false }},
                "confidence_breakdown": {{
                    "overall": 0.9, "location_confidence": 0.9, "relation_confidence": 0.9
                }},
                "original_query": "deep in Bern"
            }}"#
        )
        .expect("write candidate");

        let ctx = context();
        let path = file.path().to_string_lossy().into_owned();
        let text = output(|out| validate(&ctx, &path, out));

        let document: serde_json::Value = serde_json::from_str(&text).expect("json output");
        assert_eq!(document["query"]["buffer_config"]["distance_m"], -8000.0);
        assert_eq!(document["advisories"][0]["advisory"]["kind"], "deep_erosion");
    }

    #[test]
    fn validate_rejects_unknown_relation() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            r#"{{
                "spatial_relation": {{ "relation": "beside", "category": "buffer" }},
                "reference_location": {{ "name": "Bern" }},
                "confidence_breakdown": {{
                    "overall": 0.9, "location_confidence": 0.9, "relation_confidence": 0.9
                }},
                "original_query": "beside Bern"
            }}"#
        )
        .expect("write candidate");

        let ctx = context();
        let path = file.path().to_string_lossy().into_owned();
        let err = validate(&ctx, &path, &mut Vec::new()).expect_err("unknown relation");
        assert!(err.to_string().contains("Unknown spatial relation: 'beside'"));
    }
}
