use crate::sdk::routing::types::{InputMode, RawInputRow};
use csv::ReaderBuilder;
use std::{error::Error, fs::File, io::Read, path::Path};

/// Builds rows from command-line values.
///
/// In `Coords` mode each value is `LAT,LNG`, split on the first comma. A
/// value without a comma keeps an empty longitude, which the resolver then
/// drops like any other unparseable row.
pub fn rows_from_args(mode: InputMode, values: &[String]) -> Vec<RawInputRow> {
    values
        .iter()
        .map(|value| match mode {
            InputMode::Coords => {
                let (lat, lng) = value.split_once(',').unwrap_or((value.as_str(), ""));
                RawInputRow::coordinate(lat, lng)
            }
            InputMode::Places => RawInputRow::place(value.as_str()),
        })
        .collect()
}

/// Reads rows from a header-less CSV source, one row per record. Lines
/// starting with `#` are ignored.
///
/// Coordinate files use the first two columns. Place files join every
/// column back with `", "`, so `Paris, France` may be written unquoted.
pub fn rows_from_reader<R: Read>(mode: InputMode, reader: R) -> Result<Vec<RawInputRow>, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row = match mode {
            InputMode::Coords => RawInputRow::coordinate(
                record.get(0).unwrap_or_default(),
                record.get(1).unwrap_or_default(),
            ),
            InputMode::Places => RawInputRow::place(
                record
                    .iter()
                    .map(str::trim)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        };
        rows.push(row);
    }
    Ok(rows)
}

pub fn rows_from_file<P: AsRef<Path>>(mode: InputMode, path: P) -> Result<Vec<RawInputRow>, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(rows_from_reader(mode, file)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_args_split_on_first_comma() {
        let values = vec!["16.5,80.6".to_string(), "17".to_string(), " 1 , 2 ".to_string()];
        assert_eq!(
            rows_from_args(InputMode::Coords, &values),
            vec![
                RawInputRow::coordinate("16.5", "80.6"),
                RawInputRow::coordinate("17", ""),
                RawInputRow::coordinate(" 1 ", " 2 "),
            ]
        );
    }

    #[test]
    fn place_args_are_kept_verbatim() {
        let values = vec!["Paris, France".to_string(), "  ".to_string()];
        assert_eq!(
            rows_from_args(InputMode::Places, &values),
            vec![RawInputRow::place("Paris, France"), RawInputRow::place("  ")]
        );
    }

    #[test]
    fn coordinate_csv_skips_comments_and_keeps_short_records() {
        let data = "# lat,lng\n16.5,80.6\nbad\n17.0,81.0,extra\n";
        let rows = rows_from_reader(InputMode::Coords, data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                RawInputRow::coordinate("16.5", "80.6"),
                RawInputRow::coordinate("bad", ""),
                RawInputRow::coordinate("17.0", "81.0"),
            ]
        );
    }

    #[test]
    fn place_csv_rejoins_unquoted_commas() {
        let data = "Vijayawada\nParis, France\n\"Rome, Italy\"\n";
        let rows = rows_from_reader(InputMode::Places, data.as_bytes()).unwrap();
        assert_eq!(
            rows,
            vec![
                RawInputRow::place("Vijayawada"),
                RawInputRow::place("Paris, France"),
                RawInputRow::place("Rome, Italy"),
            ]
        );
    }
}
