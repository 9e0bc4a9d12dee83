use anyhow::Context;
use csv::WriterBuilder;
use deedcore::Traverse;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `lon,lat,zero` rows, ready to paste into a KML `<coordinates>` block.
    #[default]
    Csv,
    Kml,
    GeoJson,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "kml" => Ok(OutputFormat::Kml),
            "geojson" => Ok(OutputFormat::GeoJson),
            other => Err(format!("unknown output format {other:?}")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Kml => "kml",
            OutputFormat::GeoJson => "geojson",
        };
        f.write_str(name)
    }
}

pub fn render<W: Write>(format: OutputFormat, traverse: &Traverse, out: W) -> anyhow::Result<()> {
    match format {
        OutputFormat::Csv => render_csv(traverse, out),
        OutputFormat::Kml => render_kml(traverse, out),
        OutputFormat::GeoJson => render_geojson(traverse, out),
    }
}

fn render_csv<W: Write>(traverse: &Traverse, out: W) -> anyhow::Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);
    writer.write_record(["lon", "lat", "zero"])?;
    for vertex in traverse.vertices() {
        writer.write_record([
            format!("{:?}", vertex.longitude),
            format!("{:?}", vertex.latitude),
            "0".to_string(),
        ])?;
    }
    writer.flush().context("flushing csv output")?;
    Ok(())
}

fn render_kml<W: Write>(traverse: &Traverse, mut out: W) -> anyhow::Result<()> {
    let coordinates = traverse
        .vertices()
        .map(|v| format!("{:?},{:?},0", v.longitude, v.latitude))
        .collect::<Vec<_>>()
        .join(" ");
    write!(
        out,
        r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Deed traverse</name>
      <LineString>
        <tessellate>1</tessellate>
        <coordinates>{coordinates}</coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>
"#
    )
    .context("writing kml output")?;
    out.flush()?;
    Ok(())
}

fn render_geojson<W: Write>(traverse: &Traverse, mut out: W) -> anyhow::Result<()> {
    let coordinates: Vec<[f64; 2]> = traverse
        .vertices()
        .map(|v| [v.longitude, v.latitude])
        .collect();
    let feature = json!({
        "type": "Feature",
        "properties": { "legs": traverse.len() },
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
    });
    serde_json::to_writer_pretty(&mut out, &feature).context("writing geojson output")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deedcore::{trace, Coordinate, FlatEarthProjector, SurveyRecord};

    fn sample() -> Traverse {
        trace(
            Coordinate::new(-75.0, 40.0),
            &[SurveyRecord::new("N", 100.0), SurveyRecord::new("E", 100.0)],
            FlatEarthProjector::default(),
        )
        .unwrap()
    }

    fn rendered(format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        render(format, &sample(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn csv_lists_origin_then_points() {
        let text = rendered(OutputFormat::Csv);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "lon,lat,zero");
        assert_eq!(lines[1], "-75.0,40.0,0");
        assert!(lines[2].starts_with("-75.0,40.000"));
    }

    #[test]
    fn kml_wraps_coordinates_in_linestring() {
        let text = rendered(OutputFormat::Kml);
        assert!(text.contains("<LineString>"));
        assert!(text.contains("<coordinates>-75.0,40.0,0 "));
    }

    #[test]
    fn geojson_is_a_linestring_feature() {
        let text = rendered(OutputFormat::GeoJson);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["geometry"]["type"], "LineString");
        assert_eq!(value["geometry"]["coordinates"].as_array().unwrap().len(), 3);
        assert_eq!(value["properties"]["legs"], 2);
    }

    #[test]
    fn formats_parse_from_names() {
        assert_eq!("KML".parse::<OutputFormat>(), Ok(OutputFormat::Kml));
        assert!("svg".parse::<OutputFormat>().is_err());
    }
}
