//! Non-interactive output for the `list`, `gallery` and `show` commands.

use crate::presentation::{parse_hex_color, truncate};
use crate::types::OutputFormat;
use anyhow::Result;
use beanshelf_providers::CatalogSource;
use beanshelf_runtime::{DetailView, GalleryView};
use beanshelf_types::{Bean, stable_id};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

const ID_WIDTH: usize = 24;
const NAME_WIDTH: usize = 22;
const GROUP_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 40;

const CSV_HEADER: [&str; 6] = ["id", "name", "group", "color", "image_url", "description"];

#[derive(Serialize)]
struct Listing<'a> {
    source: CatalogSource,
    beans: &'a [Bean],
}

#[derive(Serialize)]
struct GalleryListing<'a> {
    source: Option<CatalogSource>,
    buckets: Vec<String>,
    active: Vec<&'a str>,
    beans: &'a [Bean],
}

#[derive(Serialize)]
struct DetailListing<'a> {
    bean: &'a Bean,
    position: Option<usize>,
    total: usize,
    prev: Option<&'a str>,
    next: Option<&'a str>,
}

/// Render the list projection.
pub fn render_listing<W: Write>(
    out: &mut W,
    source: CatalogSource,
    beans: &[Bean],
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let listing = Listing { source, beans };
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        }
        OutputFormat::Csv => write_csv(out, beans)?,
        OutputFormat::Plain => {
            write_table(out, beans, color)?;
            writeln!(out)?;
            writeln!(out, "{} beans (source: {})", beans.len(), source)?;
        }
    }
    Ok(())
}

/// Render the gallery projection: bucket chips, then beans grouped by bucket.
pub fn render_gallery<W: Write>(
    out: &mut W,
    view: &GalleryView,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let beans = view.visible();

    match format {
        OutputFormat::Json => {
            let listing = GalleryListing {
                source: view.load.source(),
                buckets: view.buckets(),
                active: view.active().iter().map(String::as_str).collect(),
                beans: &beans,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        }
        OutputFormat::Csv => write_csv(out, &beans)?,
        OutputFormat::Plain => {
            let chips: Vec<String> = view
                .buckets()
                .iter()
                .enumerate()
                .map(|(i, bucket)| {
                    let mark = if view.is_active(bucket) { "x" } else { " " };
                    format!("{}[{}] {}", i + 1, mark, bucket)
                })
                .collect();
            writeln!(out, "Buckets: {}", chips.join("  "))?;

            for bucket in view.active() {
                writeln!(out)?;
                let heading = format!("{}", bucket);
                if color {
                    writeln!(out, "{}", heading.bold().underline())?;
                } else {
                    writeln!(out, "{}", heading)?;
                }

                // Ids follow the position in the gallery's load order
                for (index, bean) in beans.iter().enumerate() {
                    if bean.bucket() != *bucket {
                        continue;
                    }
                    let id = stable_id(bean, index);
                    let image = if bean.has_image() { "" } else { " [no image]" };
                    writeln!(
                        out,
                        "  {:<width$} {}{}",
                        truncate(&id, ID_WIDTH),
                        bean.name,
                        image,
                        width = ID_WIDTH
                    )?;
                }
            }

            writeln!(out)?;
            match view.load.source() {
                Some(source) => writeln!(out, "{} beans (source: {})", beans.len(), source)?,
                None => writeln!(out, "{} beans", beans.len())?,
            }
        }
    }
    Ok(())
}

/// Render a resolved detail view. Callers handle the message states.
pub fn render_detail<W: Write>(
    out: &mut W,
    view: &DetailView,
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let Some(bean) = view.bean() else {
        writeln!(out, "{}", view.message().unwrap_or_default())?;
        return Ok(());
    };

    let context = view.context();
    let total = context.map(|ctx| ctx.ids.len()).unwrap_or(0);
    // An empty id list leaves the bean without a position
    let position = context.filter(|_| total > 0).map(|ctx| ctx.index);
    let prev = context.and_then(|ctx| ctx.prev_id());
    let next = context.and_then(|ctx| ctx.next_id());

    match format {
        OutputFormat::Json => {
            let listing = DetailListing {
                bean,
                position,
                total,
                prev,
                next,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&listing)?)?;
        }
        OutputFormat::Csv => write_csv(out, std::slice::from_ref(bean))?,
        OutputFormat::Plain => {
            if color {
                writeln!(out, "{}", bean.name.bold())?;
            } else {
                writeln!(out, "{}", bean.name)?;
            }
            writeln!(out, "  id:          {}", view.id())?;
            if !bean.group.is_empty() {
                writeln!(out, "  group:       {}", bean.group)?;
            }
            if !bean.color.is_empty() {
                writeln!(out, "  color:       {}", color_cell(&bean.color, color))?;
            }
            if bean.has_image() {
                writeln!(out, "  image:       {}", bean.image_url)?;
            } else {
                writeln!(out, "  image:       [no image]")?;
            }
            if !bean.description.is_empty() {
                writeln!(out, "  description: {}", bean.description)?;
            }
            if let Some(index) = position {
                writeln!(out, "  position:    {} of {}", index + 1, total)?;
            }
            writeln!(out, "  prev:        {}", prev.unwrap_or("-"))?;
            writeln!(out, "  next:        {}", next.unwrap_or("-"))?;
        }
    }
    Ok(())
}

fn color_cell(value: &str, color: bool) -> String {
    match parse_hex_color(value) {
        Some((r, g, b)) if color => format!("{} {}", "   ".on_truecolor(r, g, b), value),
        _ => value.to_string(),
    }
}

fn write_table<W: Write>(out: &mut W, beans: &[Bean], color: bool) -> Result<()> {
    if beans.is_empty() {
        writeln!(out, "No beans match.")?;
        return Ok(());
    }

    let header = format!(
        "{:<id$} {:<name$} {:<group$} DESCRIPTION",
        "ID",
        "NAME",
        "GROUP",
        id = ID_WIDTH,
        name = NAME_WIDTH,
        group = GROUP_WIDTH
    );
    if color {
        writeln!(out, "{}", header.bold())?;
    } else {
        writeln!(out, "{}", header)?;
    }

    for (index, bean) in beans.iter().enumerate() {
        let id = format!("{:<w$}", truncate(&stable_id(bean, index), ID_WIDTH), w = ID_WIDTH);
        let name = format!("{:<w$}", truncate(&bean.name, NAME_WIDTH), w = NAME_WIDTH);
        let group = format!("{:<w$}", truncate(&bean.group, GROUP_WIDTH), w = GROUP_WIDTH);
        let description = truncate(&bean.description, DESCRIPTION_WIDTH);

        let row = if color {
            format!("{} {} {} {}", id.dimmed(), name, group.cyan(), description)
        } else {
            format!("{} {} {} {}", id, name, group, description)
        };
        writeln!(out, "{}", row.trim_end())?;
    }
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, beans: &[Bean]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;

    for (index, bean) in beans.iter().enumerate() {
        wtr.write_record([
            stable_id(bean, index).as_str(),
            bean.name.as_str(),
            bean.group.as_str(),
            bean.color.as_str(),
            bean.image_url.as_str(),
            bean.description.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use beanshelf_providers::Catalog;
    use beanshelf_types::{NavigationContext, Origin};

    fn beans() -> Vec<Bean> {
        vec![
            Bean::new("f1", "Apple")
                .with_group("Orchard")
                .with_description("Crisp"),
            Bean::new("", "Banana Split").with_group("Tropical"),
        ]
    }

    fn render(format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render_listing(&mut buf, CatalogSource::Bundled, &beans(), format, false).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_csv_uses_stable_ids() {
        insta::assert_snapshot!(render(OutputFormat::Csv), @r"
        id,name,group,color,image_url,description
        f1,Apple,Orchard,,,Crisp
        name-banana-split-1,Banana Split,Tropical,,,
        ");
    }

    #[test]
    fn test_plain_table_and_source_footer() {
        let output = render(OutputFormat::Plain);
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("ID"));
        assert!(lines[0].ends_with("DESCRIPTION"));
        assert!(lines[1].starts_with("f1 "));
        assert!(lines[1].ends_with("Crisp"));
        assert!(lines[2].starts_with("name-banana-split-1"));
        assert!(lines[2].ends_with("Tropical"));
        assert_eq!(lines.last(), Some(&"2 beans (source: bundled)"));
    }

    #[test]
    fn test_json_listing_shape() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(json["source"], "bundled");
        assert_eq!(json["beans"][1]["id"], "");
        assert_eq!(json["beans"][0]["imageUrl"], "");
    }

    #[test]
    fn test_gallery_groups_active_buckets() {
        let mut view = GalleryView::new();
        view.on_loaded(Catalog {
            source: CatalogSource::Primary,
            beans: vec![
                Bean::new("b1", "Blueberry").with_group("Berry"),
                Bean::new("c1", "Lemon").with_group("Citrus"),
                Bean::new("m1", "Spearmint").with_group("Mint"),
                Bean::new("t1", "Mango").with_group("Tropical"),
            ],
        });

        let mut buf = Vec::new();
        render_gallery(&mut buf, &view, OutputFormat::Plain, false).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("Buckets: 1[x] Berry  2[x] Citrus  3[x] Mint  4[ ] Tropical"));
        assert!(output.contains("Spearmint [no image]"));
        assert!(!output.contains("Mango"));
        assert!(output.ends_with("3 beans (source: primary)\n"));
    }

    #[test]
    fn test_detail_plain_shows_neighbours() {
        let records = vec![
            Bean::new("a", "Apple"),
            Bean::new("b", "Banana").with_color("#ff0"),
            Bean::new("c", "Cherry"),
        ];
        let context = NavigationContext::from_records(records, 1, Some(Origin::List));
        let (view, _) = DetailView::enter("b", Some(context));

        let mut buf = Vec::new();
        render_detail(&mut buf, &view, OutputFormat::Plain, false).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("Banana\n"));
        assert!(output.contains("  color:       #ff0\n"));
        assert!(output.contains("  image:       [no image]\n"));
        assert!(output.contains("  position:    2 of 3\n"));
        assert!(output.contains("  prev:        a\n"));
        assert!(output.contains("  next:        c\n"));
    }

    #[test]
    fn test_detail_with_empty_identifier_list_has_no_position() {
        let (mut view, _) = DetailView::enter("b", None);
        view.on_record(Some(Bean::new("b", "Banana")));
        view.on_identifiers(Ok(Vec::new()));

        let mut buf = Vec::new();
        render_detail(&mut buf, &view, OutputFormat::Plain, false).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.starts_with("Banana\n"));
        assert!(!output.contains("position:"));
        assert!(output.contains("  prev:        -\n"));

        let mut buf = Vec::new();
        render_detail(&mut buf, &view, OutputFormat::Json, false).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["position"], serde_json::Value::Null);
        assert_eq!(json["total"], 0);
    }
}
