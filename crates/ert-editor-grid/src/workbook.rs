use crate::error::GridError;
use crate::worksheet::Worksheet;

/// An ordered set of uniquely named worksheets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Worksheet>,
}

impl Workbook {
    pub const DEFAULT_SHEET_NAME: &'static str = "Sheet1";

    pub fn new() -> Self {
        Self::default()
    }

    /// A workbook with one empty sheet, used when there is nothing to load.
    pub fn blank() -> Self {
        Self {
            sheets: vec![Worksheet::new(Self::DEFAULT_SHEET_NAME)],
        }
    }

    /// Add a sheet, replacing any sheet with the same name.
    pub fn push(&mut self, sheet: Worksheet) {
        match self.sheets.iter_mut().find(|s| s.name() == sheet.name()) {
            Some(existing) => *existing = sheet,
            None => self.sheets.push(sheet),
        }
    }

    pub fn sheets(&self) -> &[Worksheet] {
        &self.sheets
    }

    pub fn sheets_mut(&mut self) -> &mut [Worksheet] {
        &mut self.sheets
    }

    pub fn sheet_names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(Worksheet::name)
    }

    pub fn first(&self) -> Option<&Worksheet> {
        self.sheets.first()
    }

    pub fn sheet(&self, name: &str) -> Result<&Worksheet, GridError> {
        self.sheets
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| GridError::UnknownWorksheet(name.to_string()))
    }

    pub fn sheet_mut(&mut self, name: &str) -> Result<&mut Worksheet, GridError> {
        self.sheets
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| GridError::UnknownWorksheet(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.iter().any(|s| s.name() == name)
    }
}
