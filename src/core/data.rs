//! Points, series and data sets, plus the CSV / JSON loaders that build them.

use std::{
    collections::HashMap,
    io::{self, BufRead, BufReader, Read},
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

// --- Public Data Structs ---

/// One `(x, y)` sample.  Deserializes from a two-element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// One plotted line, in the order the caller supplied it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series(Vec<Point>);

impl Series {
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn push(&mut self, p: Point) {
        self.0.push(p);
    }

    /// Copy of the points ordered by ascending x.  Equal x keep input order.
    #[must_use]
    pub fn sorted_by_x(&self) -> Vec<Point> {
        let mut sorted = self.0.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        sorted
    }
}

impl<P: Into<Point>> From<Vec<P>> for Series {
    fn from(v: Vec<P>) -> Self {
        Self(v.into_iter().map(Into::into).collect())
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Every series of one chart.  All of them share the same axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset(Vec<Series>);

impl Dataset {
    #[inline]
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.0.iter()
    }

    /// All points of all series, series by series.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.0.iter().flat_map(|s| s.points().iter())
    }

    #[inline]
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.0.iter().map(Series::len).sum()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Series> for Dataset {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// --- convenience conversions: a bare series becomes a one-line data set ---
impl From<Series> for Dataset {
    fn from(s: Series) -> Self {
        Self(vec![s])
    }
}

impl From<Vec<Series>> for Dataset {
    fn from(v: Vec<Series>) -> Self {
        Self(v)
    }
}

impl From<Vec<Point>> for Dataset {
    fn from(v: Vec<Point>) -> Self {
        Series::from(v).into()
    }
}

impl From<Vec<(f64, f64)>> for Dataset {
    fn from(v: Vec<(f64, f64)>) -> Self {
        Series::from(v).into()
    }
}

impl From<Vec<[f64; 2]>> for Dataset {
    fn from(v: Vec<[f64; 2]>) -> Self {
        Series::from(v).into()
    }
}

impl From<Vec<Vec<(f64, f64)>>> for Dataset {
    fn from(v: Vec<Vec<(f64, f64)>>) -> Self {
        v.into_iter().map(Series::from).collect()
    }
}

impl From<Vec<Vec<[f64; 2]>>> for Dataset {
    fn from(v: Vec<Vec<[f64; 2]>>) -> Self {
        v.into_iter().map(Series::from).collect()
    }
}

// --- Error Handling ---
#[derive(Debug, Error)]
#[error("{}{kind}", line_prefix(.line))]
pub struct ParseError {
    /// 1-based input line, 0 when the fault is not tied to a line.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("expected 2-3 columns, got {0}")]
    BadColumnCount(usize),
    #[error("invalid {field} value '{text}'")]
    BadFloat { field: &'static str, text: String },
    #[error("expected a list of [x, y] pairs or a list of such lists")]
    Shape,
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no data points")]
    Empty,
}

fn line_prefix(line: &usize) -> String {
    if *line == 0 {
        String::new()
    } else {
        format!("line {line}: ")
    }
}

impl ParseError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

// --- Helpers ---
#[inline]
fn trim(b: &[u8]) -> &[u8] {
    b.trim_ascii()
}

/// Rewrite U+2212 MINUS SIGN as ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with("\u{2212}".as_bytes()) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseError> {
    let bad = || {
        ParseError::at(
            line,
            ParseErrorKind::BadFloat {
                field,
                text: String::from_utf8_lossy(bytes).into_owned(),
            },
        )
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

// --- CSV ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `x,y[,series]` rows.  Rows sharing a `series` label form one line,
/// lines ordered by first appearance; unlabelled rows share one line.
pub fn read_csv<R: Read>(src: R) -> Result<Dataset, ParseError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut lines: Vec<Series> = Vec::new();
    let mut by_label: HashMap<Vec<u8>, usize> = HashMap::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|e| ParseError::at(line_no, e.into()))?;
        if n == 0 {
            break;
        }
        line_no += 1;

        while buf.last().is_some_and(|b| matches!(b, b'\n' | b'\r')) {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        let cols: Vec<&[u8]> = buf.split(|&b| b == b',').map(trim).collect();

        // simple header detection (non-numeric first field)
        if !saw_first {
            saw_first = true;
            if lexical_core::parse::<f64>(cols[0]).is_err() {
                continue;
            }
        }

        if !(2..=3).contains(&cols.len()) {
            return Err(ParseError::at(
                line_no,
                ParseErrorKind::BadColumnCount(cols.len()),
            ));
        }

        let x = parse_f64(cols[0], line_no, "x")?;
        let y = parse_f64(cols[1], line_no, "y")?;
        let label = cols.get(2).copied().unwrap_or_default();

        let next = by_label.len();
        let slot = *by_label.entry(label.to_vec()).or_insert(next);
        if slot == lines.len() {
            lines.push(Series::default());
        }
        lines[slot].push(Point::new(x, y));
    }

    if lines.is_empty() {
        return Err(ParseError::at(0, ParseErrorKind::Empty));
    }
    Ok(Dataset::from(lines))
}

/// Read a JSON array of `[x, y]` pairs (one series) or an array of such
/// arrays (several series).  The first element decides which.
pub fn read_json<R: Read>(src: R) -> Result<Dataset, ParseError> {
    let value: Value =
        serde_json::from_reader(src).map_err(|e| ParseError::at(e.line(), e.into()))?;

    let nested = value
        .get(0)
        .and_then(|first| first.get(0))
        .is_some_and(Value::is_array);

    let data = if nested {
        Vec::<Vec<Point>>::deserialize(&value)
            .map(|v| v.into_iter().map(Series::from).collect::<Dataset>())
    } else {
        Vec::<Point>::deserialize(&value).map(Dataset::from)
    };
    let data = data.map_err(|_| ParseError::at(0, ParseErrorKind::Shape))?;

    if data.total_points() == 0 {
        return Err(ParseError::at(0, ParseErrorKind::Empty));
    }
    Ok(data)
}

/// Load `path` (`-` for stdin) as CSV, or as JSON when `json` is set.
pub fn read_from_path(path: &str, json: bool) -> Result<Dataset, ParseError> {
    let src: Box<dyn Read> = if path == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(std::fs::File::open(path).map_err(|e| ParseError::at(0, e.into()))?)
    };
    if json { read_json(src) } else { read_csv(src) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_series_wraps_into_dataset() {
        let data = Dataset::from(vec![(0.0, 1.0), (2.0, 3.0)]);
        assert_eq!(data.series().len(), 1);
        assert_eq!(data.total_points(), 2);

        let multi = Dataset::from(vec![vec![[0.0, 1.0]], vec![[2.0, 3.0], [4.0, 5.0]]]);
        assert_eq!(multi.series().len(), 2);
        assert_eq!(multi.total_points(), 3);
    }

    #[test]
    fn test_sort_is_stable_for_equal_x() {
        let s = Series::from(vec![(2.0, 0.0), (1.0, 5.0), (1.0, 6.0)]);
        let ys: Vec<f64> = s.sorted_by_x().iter().map(|p| p.y).collect();
        assert_eq!(ys, [5.0, 6.0, 0.0]);
    }

    #[test]
    fn test_csv_groups_by_series_label() {
        let src = "x,y,name\n0,1,a\n1,2,b\n# comment\n\n2,\u{2212}3,a\n";
        let data = read_csv(src.as_bytes()).unwrap();
        assert_eq!(data.series().len(), 2);
        assert_eq!(
            data.series()[0].points(),
            &[Point::new(0.0, 1.0), Point::new(2.0, -3.0)]
        );
        assert_eq!(data.series()[1].points(), &[Point::new(1.0, 2.0)]);
    }

    #[test]
    fn test_csv_rejects_bad_rows() {
        let err = read_csv("0,1\n1,nan\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 2);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat { field: "y", .. }));

        let err = read_csv("0,1,2,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::BadColumnCount(4)));

        let err = read_csv("# nothing here\n".as_bytes()).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Empty));
    }

    #[test]
    fn test_json_shapes() {
        let single = read_json("[[0, 0], [1, 1.5]]".as_bytes()).unwrap();
        assert_eq!(single.series().len(), 1);

        let multi = read_json("[[[0, 0]], [[1, 1], [2, 2]]]".as_bytes()).unwrap();
        assert_eq!(multi.series().len(), 2);

        let mixed = read_json("[[[0, 0]], [1, 1]]".as_bytes()).unwrap_err();
        assert!(matches!(mixed.kind, ParseErrorKind::Shape));

        let broken = read_json("[[0, 0],".as_bytes()).unwrap_err();
        assert!(matches!(broken.kind, ParseErrorKind::Json(_)));
    }
}
