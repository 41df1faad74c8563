// src/csv.rs
//
// Lead rows in and out of CSV. Headers come from the serde renames on `Lead`,
// so column order is the field order there (see `consts::COLUMNS`).

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::lead::Lead;
use crate::Result;

/// Spreadsheet apps need this to pick UTF-8 for the accented headers.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/* ---------------- Writing ---------------- */

/// BOM + header + one row per lead.
pub fn write_leads<'a, W, I>(mut w: W, leads: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Lead>,
{
    w.write_all(UTF8_BOM)?;
    write_rows(w, leads)
}

fn write_rows<'a, W, I>(w: W, leads: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Lead>,
{
    let mut out = csv::Writer::from_writer(w);
    for lead in leads {
        out.serialize(lead)?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_leads_to_path<'a, I>(path: &Path, leads: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Lead>,
{
    let file = File::create(path)?; // truncate/overwrite
    let mut buf = BufWriter::new(file);
    write_leads(&mut buf, leads)?;
    buf.flush()?;
    Ok(())
}

/// CSV text for the clipboard: header + rows, no BOM.
/// An empty selection still yields the header line.
pub fn to_export_string(leads: &[&Lead]) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();

    if leads.is_empty() {
        let mut out = csv::Writer::from_writer(&mut buf);
        out.write_record(crate::config::consts::COLUMNS)?;
        out.flush()?;
    } else {
        write_rows(&mut buf, leads.iter().copied())?;
    }

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

/* ---------------- Reading ---------------- */

/// Reader over `src` with a leading BOM removed. Headers are expected.
pub fn reader_without_bom<R: Read>(mut src: R) -> Result<csv::Reader<std::io::Cursor<Vec<u8>>>> {
    let mut bytes = Vec::new();
    src.read_to_end(&mut bytes)?;
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }
    Ok(csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(bytes)))
}
