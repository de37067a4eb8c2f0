// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use html_escape::encode_quoted_attribute;

use crate::config::consts::{DEFAULT_SHEET_NAME, EXCEL_MIME_TYPE};
use crate::errors::EncodeError;
use crate::table::{Blob, ColumnDescriptor, ExportFormat, Row};
use crate::traits::Encoder;

const STYLE: &str = "table { border-collapse: collapse; }
th, td { border: 1px solid #d0d7de; padding: 4px 8px; }
th { background-color: #4472c4; color: #ffffff; font-weight: bold; }
tr.even td { background-color: #ffffff; }
tr.odd td { background-color: #f2f2f2; }";

/// Excel-openable HTML table.
///
/// Excel imports a single-table HTML document served as
/// `application/vnd.ms-excel`. Headers and cells are escaped for
/// `& < > " '`; body rows alternate between the `even` and `odd` classes.
#[derive(Debug, Clone)]
pub struct ExcelEncoder {
    sheet_name: String,
}

impl ExcelEncoder {
    pub fn new() -> Self {
        Self::with_sheet_name(DEFAULT_SHEET_NAME)
    }

    pub fn with_sheet_name(sheet_name: impl Into<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
        }
    }

    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }
}

impl Default for ExcelEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parity class of a body row
fn row_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "even"
    } else {
        "odd"
    }
}

impl Encoder for ExcelEncoder {
    fn encode(&self, rows: &[Row], columns: &[ColumnDescriptor]) -> Result<Blob, EncodeError> {
        let sheet = encode_quoted_attribute(&self.sheet_name);
        let mut html = String::new();

        html.push_str(&format!(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
             xmlns:x=\"urn:schemas-microsoft-com:office:excel\" \
             xmlns=\"http://www.w3.org/TR/REC-html40\">\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <title>{sheet}</title>\n\
             <!--[if gte mso 9]><xml><x:ExcelWorkbook><x:ExcelWorksheets><x:ExcelWorksheet>\
             <x:Name>{sheet}</x:Name><x:WorksheetOptions><x:DisplayGridlines/></x:WorksheetOptions>\
             </x:ExcelWorksheet></x:ExcelWorksheets></x:ExcelWorkbook></xml><![endif]-->\n\
             <style>\n{STYLE}\n</style>\n\
             </head>\n<body>\n<table>\n<thead>\n<tr>"
        ));

        for column in columns {
            html.push_str(&format!("<th>{}</th>", encode_quoted_attribute(&column.header)));
        }
        html.push_str("</tr>\n</thead>\n<tbody>\n");

        for (index, row) in rows.iter().enumerate() {
            html.push_str(&format!("<tr class=\"{}\">", row_class(index)));
            for cell in row.cells(index, columns)? {
                html.push_str(&format!("<td>{}</td>", encode_quoted_attribute(&cell)));
            }
            html.push_str("</tr>\n");
        }

        html.push_str("</tbody>\n</table>\n</body>\n</html>\n");

        Ok(Blob::new(html, EXCEL_MIME_TYPE))
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Excel
    }

    fn name(&self) -> &'static str {
        "excel"
    }
}
