//! IES Photometric Data

use crate::error::*;
use crate::pbrt::*;
use pest::Parser;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::str::FromStr;

/// The `pest` parser for the numeric block of an IES file.
#[derive(Parser)]
#[grammar = "spherical_function/ies.pest"]
struct IesDataParser;

/// Photometric goniometer type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PhotometricType {
    /// Vertical angles measured from nadir; architectural fixtures.
    C,

    /// Floodlights.
    B,

    /// Automotive lamps.
    A,
}

impl PhotometricType {
    fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::C),
            2 => Some(Self::B),
            3 => Some(Self::A),
            _ => None,
        }
    }
}

impl fmt::Display for PhotometricType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::C => write!(f, "C"),
            Self::B => write!(f, "B"),
            Self::A => write!(f, "A"),
        }
    }
}

/// Measured luminous intensity of a fixture, read from an IES LM-63 file.
#[derive(Clone, Debug)]
pub struct PhotometricDataIes {
    /// Text after the `IESNA:` tag on the first line.
    pub version: String,

    /// `[KEYWORD] value` pairs from the header; `[MORE]` lines are appended.
    pub keywords: BTreeMap<String, String>,

    pub number_of_lamps: u32,
    pub lumens_per_lamp: Float,
    pub candela_multiplier: Float,
    pub photometric_type: PhotometricType,
    pub units_type: u32,
    pub luminaire_width: Float,
    pub luminaire_length: Float,
    pub luminaire_height: Float,
    pub ballast_factor: Float,
    pub ballast_lamp_photometric_factor: Float,
    pub input_watts: Float,

    /// Vertical angles in degrees.
    pub vertical_angles: Vec<Float>,

    /// Horizontal angles in degrees.
    pub horizontal_angles: Vec<Float>,

    /// Candela values; one row of `vertical_angles.len()` values per
    /// horizontal angle.
    pub candela_values: Vec<Vec<Float>>,
}

impl PhotometricDataIes {
    /// Reads and parses an IES file.
    ///
    /// * `path` - Path to the file.
    pub fn read(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SamplingError::Io {
            path: path.to_string(),
            source,
        })?;
        let data = Self::parse(&contents)?;
        info!(
            "Loaded IES '{}': {} vertical x {} horizontal angles",
            path,
            data.vertical_angles.len(),
            data.horizontal_angles.len()
        );
        Ok(data)
    }

    /// Parses the contents of an IES file.
    ///
    /// * `contents` - The file contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut lines = contents.split_inclusive('\n');

        // Check for valid IES file and get version.
        let first = lines.next().unwrap_or_default();
        if !first.contains("IESNA") {
            return Err(invalid("missing IESNA header line"));
        }
        let version = first
            .split_once(':')
            .map_or("", |(_, v)| v)
            .trim()
            .to_string();

        // Collect keywords up to the TILT line.
        let mut consumed = first.len();
        let mut keywords = BTreeMap::new();
        let mut current: Option<(String, String)> = None;
        let mut tilt = None;
        for line in lines.by_ref() {
            consumed += line.len();
            if line.contains("TILT") {
                tilt = Some(line.trim());
                break;
            }
            let (start, end) = match (line.find('['), line.find(']')) {
                (Some(start), Some(end)) if end > start => (start, end),
                _ => continue,
            };
            let key = &line[start + 1..end];
            let value = line[end + 1..].trim();
            match current.as_mut() {
                Some((_, v)) if key == "MORE" || key.is_empty() => {
                    v.push(' ');
                    v.push_str(value);
                }
                _ => {
                    if let Some((k, v)) = current.take() {
                        keywords.insert(k, v);
                    }
                    current = Some((key.to_string(), value.to_string()));
                }
            }
        }
        if let Some((k, v)) = current {
            keywords.insert(k, v);
        }

        match tilt {
            None => return Err(invalid("missing TILT line")),
            Some(t) if !t.contains("TILT=NONE") => {
                return Err(invalid(&format!("unsupported '{t}'; only TILT=NONE is handled")))
            }
            _ => (),
        }

        let tokens = parse_numbers(&contents[consumed..])?;
        let mut values = Values::new(&tokens);

        let number_of_lamps = values.next("number of lamps")?;
        let lumens_per_lamp = values.next("lumens per lamp")?;
        let candela_multiplier = values.next("candela multiplier")?;
        let n_vertical: usize = values.next("number of vertical angles")?;
        let n_horizontal: usize = values.next("number of horizontal angles")?;
        let code: u32 = values.next("photometric type")?;
        let photometric_type = PhotometricType::from_code(code)
            .ok_or_else(|| invalid(&format!("unknown photometric type {code}")))?;
        let units_type = values.next("units type")?;
        let luminaire_width = values.next("luminaire width")?;
        let luminaire_length = values.next("luminaire length")?;
        let luminaire_height = values.next("luminaire height")?;
        let ballast_factor = values.next("ballast factor")?;
        let ballast_lamp_photometric_factor = values.next("ballast lamp photometric factor")?;
        let input_watts = values.next("input watts")?;

        if n_vertical == 0 || n_horizontal == 0 {
            return Err(invalid(&format!(
                "{n_vertical} vertical and {n_horizontal} horizontal angles"
            )));
        }

        let vertical_angles = values.take(n_vertical, "vertical angles")?;
        let horizontal_angles = values.take(n_horizontal, "horizontal angles")?;
        let candela_values = (0..n_horizontal)
            .map(|_| values.take(n_vertical, "candela values"))
            .collect::<Result<Vec<Vec<Float>>>>()?;

        if values.remaining() > 0 {
            warn!("IES data has {} trailing values", values.remaining());
        }

        Ok(Self {
            version,
            keywords,
            number_of_lamps,
            lumens_per_lamp,
            candela_multiplier,
            photometric_type,
            units_type,
            luminaire_width,
            luminaire_length,
            luminaire_height,
            ballast_factor,
            ballast_lamp_photometric_factor,
            input_watts,
            vertical_angles,
            horizontal_angles,
            candela_values,
        })
    }
}

fn invalid(msg: &str) -> SamplingError {
    SamplingError::InvalidPhotometricData(msg.to_string())
}

/// Splits the numeric block into number tokens.
///
/// * `block` - Text following the TILT line.
fn parse_numbers(block: &str) -> Result<Vec<&str>> {
    let data = IesDataParser::parse(Rule::data, block)
        .map_err(|err| invalid(&format!("error parsing data block. {err}")))?
        .next()
        .ok_or_else(|| invalid("empty data block"))?;

    Ok(data
        .into_inner()
        .filter(|pair| pair.as_rule() == Rule::number)
        .map(|pair| pair.as_str())
        .collect())
}

/// Sequential reader over number tokens.
struct Values<'a> {
    tokens: &'a [&'a str],
    pos: usize,
}

impl<'a> Values<'a> {
    fn new(tokens: &'a [&'a str]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    fn next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = self
            .tokens
            .get(self.pos)
            .ok_or_else(|| invalid(&format!("unexpected end of data reading {what}")))?;
        self.pos += 1;
        token
            .parse::<T>()
            .map_err(|_| invalid(&format!("'{token}' is not a valid {what}")))
    }

    fn take(&mut self, n: usize, what: &str) -> Result<Vec<Float>> {
        (0..n).map(|_| self.next::<Float>(what)).collect()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const SINGLE_PLANE: &str = "IESNA:LM-63-2002
[TEST] synthetic fixture
[MANUFAC] Example Lighting
[MORE] second line
TILT=NONE
1 1000 1.0 3 1 1 2 0.0 0.0 0.0
1.0 1.0 100
0.0 45.0 90.0
0.0
100.0, 50.0, 0.0
";

    #[test]
    fn parses_header_and_keywords() {
        let data = PhotometricDataIes::parse(SINGLE_PLANE).unwrap();
        assert_eq!(data.version, "LM-63-2002");
        assert_eq!(data.keywords["TEST"], "synthetic fixture");
        assert_eq!(data.keywords["MANUFAC"], "Example Lighting second line");
        assert_eq!(data.number_of_lamps, 1);
        assert_eq!(data.lumens_per_lamp, 1000.0);
        assert_eq!(data.photometric_type, PhotometricType::C);
        assert_eq!(data.units_type, 2);
        assert_eq!(data.input_watts, 100.0);
        assert_eq!(data.vertical_angles, vec![0.0, 45.0, 90.0]);
        assert_eq!(data.horizontal_angles, vec![0.0]);
        assert_eq!(data.candela_values, vec![vec![100.0, 50.0, 0.0]]);
    }

    #[test]
    fn rejects_malformed_files() {
        assert!(matches!(
            PhotometricDataIes::parse("not an ies file\nTILT=NONE\n"),
            Err(SamplingError::InvalidPhotometricData(_))
        ));

        let tilt = SINGLE_PLANE.replace("TILT=NONE", "TILT=INCLUDE");
        assert!(PhotometricDataIes::parse(&tilt).is_err());

        let truncated = SINGLE_PLANE.replace("100.0, 50.0, 0.0", "100.0, 50.0");
        assert!(PhotometricDataIes::parse(&truncated).is_err());

        let garbage = SINGLE_PLANE.replace("50.0", "fifty");
        assert!(PhotometricDataIes::parse(&garbage).is_err());

        let bad_type = SINGLE_PLANE.replace("3 1 1 2", "3 1 7 2");
        assert!(PhotometricDataIes::parse(&bad_type).is_err());
    }

    #[test]
    fn read_reports_missing_file() {
        assert!(matches!(
            PhotometricDataIes::read("/nonexistent/fixture.ies"),
            Err(SamplingError::Io { .. })
        ));
    }
}
