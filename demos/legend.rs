use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use tracing::info;
use tracing_subscriber::EnvFilter;
use aqi_scale::{ColorRange, Legend, Reading, ScaleColor, AirQualityIndex,
                SuppliedColor, conditions::CurrentConditions};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>", c.hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>", c.to_gray().hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn sweep(fh: &mut impl Write, range: impl ColorRange<RGB8>, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = range.sweep(n).map(|(_, c)| c).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn legend(fh: &mut impl Write, legend: Legend) -> Result<(), Err> {
    writeln!(fh, "<table>")?;
    for row in RGB8::scale().legend(legend) {
        writeln!(fh, "  <tr><td style=\"width: 20px; background-color: {}\">\
                      </td><td>{}</td><td>{}</td></tr>",
                 row.swatch.hex(), row.label, row.range)?;
    }
    writeln!(fh, "</table><br/>")?;
    Ok(())
}

fn reading(fh: &mut impl Write, index: &AirQualityIndex) -> Result<(), Err> {
    match Reading::of(index) {
        Some(r) => writeln!(
            fh, "<p><span style=\"padding: 4px 10px; color: white; \
                 background-color: {}\">{}</span> {} ({}), needle at \
                 {:.1}°</p>",
            r.color.css(), r.label(), index.title(),
            r.category_label(Legend::Gauge), r.angle)?,
        None => writeln!(fh, "<p>{}: not available</p>", index.title())?,
    }
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let path = "legend.html";
    let mut fh = BufWriter::new(File::create(path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>aqi-scale: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Scale</h3>")?;
    sweep(&mut fh, RGB8::scale(), 11, 43, "every 50")?;
    sweep(&mut fh, RGB8::scale(), 501, 1, "continuous (heatmap)")?;
    sweep(&mut fh, RGB8::bands(), 501, 1, "categories")?;
    let stops: Vec<_> = RGB8::scale().gradient_stops().into_iter()
        .map(|(_, c)| c).collect();
    table_of_colors(&mut fh, &stops, 43, "gauge arc stops")?;

    writeln!(fh, "<h3>Gauge legend</h3>")?;
    legend(&mut fh, Legend::Gauge)?;
    writeln!(fh, "<h3>Map legend</h3>")?;
    legend(&mut fh, Legend::Map)?;

    writeln!(fh, "<h3>Readings</h3>")?;
    for aqi in [0, 42, 75, 180, 350, 640] {
        reading(&mut fh, &AirQualityIndex::new("ind_cpcb", aqi))?;
    }
    let supplied = AirQualityIndex::new("uaqi", 63)
        .with_color(SuppliedColor::new(0.99, 0.75, 0.));
    reading(&mut fh, &supplied)?;
    let current = CurrentConditions::from_json(
        r#"{"indexes": [{"code": "usa_epa", "aqi": 120}]}"#)?;
    match current.preferred() {
        Some(index) => reading(&mut fh, index)?,
        None => writeln!(fh, "<p>No preferred index reported.</p>")?,
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    fh.flush()?;
    info!(path, "legend written");
    Ok(())
}
