/*!

Tabular contact records, one row per person-to-contact edge. Rows carry the
columns `Person_ID`, `Contact_ID`, `Infection_Status`, and `Days_Infected`;
any other columns are ignored. Validation is fail-fast: the
first malformed row aborts the whole load, since a partially loaded edge list
does not describe a meaningful contact network.

*/

use crate::{EpiError, NodeId, Status};
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A validated contact record. `seed_status` and `days_infected` describe the
/// initial epidemic state of the `person_id` side only.
#[derive(Clone, Debug, PartialEq)]
pub struct ContactRecord {
    pub person_id: NodeId,
    pub contact_id: NodeId,
    pub seed_status: Option<Status>,
    pub days_infected: u32,
}

impl ContactRecord {
    /// A plain contact edge with no seeded state.
    #[must_use]
    pub fn new(person_id: impl Into<NodeId>, contact_id: impl Into<NodeId>) -> Self {
        ContactRecord {
            person_id: person_id.into(),
            contact_id: contact_id.into(),
            seed_status: None,
            days_infected: 0,
        }
    }

    /// A contact edge whose person side starts in `status`.
    #[must_use]
    pub fn seeded(
        person_id: impl Into<NodeId>,
        contact_id: impl Into<NodeId>,
        status: Status,
        days_infected: u32,
    ) -> Self {
        ContactRecord {
            person_id: person_id.into(),
            contact_id: contact_id.into(),
            seed_status: Some(status),
            days_infected,
        }
    }
}

/// One CSV row as deserialized, before validation. Every field is optional at
/// this layer so that missing columns and empty values produce our own
/// diagnostics rather than a serde error.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Person_ID")]
    person_id: Option<String>,
    #[serde(rename = "Contact_ID")]
    contact_id: Option<String>,
    #[serde(rename = "Infection_Status")]
    infection_status: Option<String>,
    #[serde(rename = "Days_Infected")]
    days_infected: Option<String>,
}

impl RawRecord {
    /// Validates one row. `row` is the 1-based data row number, used in
    /// diagnostics.
    fn validate(self, row: usize) -> Result<ContactRecord, EpiError> {
        let person_id = match self.person_id {
            Some(id) if !id.is_empty() => NodeId(id),
            _ => {
                return Err(EpiError::validation(format!(
                    "record {row}: Person_ID is missing"
                )));
            }
        };
        let contact_id = match self.contact_id {
            Some(id) if !id.is_empty() => NodeId(id),
            _ => {
                return Err(EpiError::validation(format!(
                    "record {row}: Contact_ID is missing"
                )));
            }
        };

        let seed_status = match self.infection_status.as_deref() {
            None | Some("") => None,
            Some("Susceptible") => Some(Status::Susceptible),
            Some("Infected") => Some(Status::Infected),
            // An explicitly recovered person is a valid starting point; they
            // simply begin in the absorbing state.
            Some("Recovered") => Some(Status::Recovered),
            Some(other) => {
                return Err(EpiError::validation(format!(
                    "record {row}: Infection_Status has unrecognized value `{other}`"
                )));
            }
        };

        let days_infected = match self.days_infected.as_deref() {
            None | Some("") => 0,
            Some(value) => value.parse::<u32>().map_err(|_| {
                EpiError::validation(format!(
                    "record {row}: Days_Infected `{value}` is not a non-negative integer"
                ))
            })?,
        };

        Ok(ContactRecord {
            person_id,
            contact_id,
            seed_status,
            days_infected,
        })
    }
}

/// Reads and validates contact records from CSV data.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<ContactRecord>, EpiError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<RawRecord>().enumerate() {
        records.push(row?.validate(index + 1)?);
    }
    debug!("loaded {} contact records", records.len());
    Ok(records)
}

/// Reads and validates contact records from a CSV file.
pub fn read_records_from_path(path: impl AsRef<Path>) -> Result<Vec<ContactRecord>, EpiError> {
    read_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(data: &str) -> Result<Vec<ContactRecord>, EpiError> {
        read_records(data.as_bytes())
    }

    #[test]
    fn parses_full_rows() {
        let records = parse(
            "Person_ID,Contact_ID,Infection_Status,Days_Infected\n\
             1,2,Infected,3\n\
             2,3,Susceptible,0\n",
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                ContactRecord::seeded("1", "2", Status::Infected, 3),
                ContactRecord::seeded("2", "3", Status::Susceptible, 0),
            ]
        );
    }

    #[test]
    fn optional_fields_default() {
        let records = parse("Person_ID,Contact_ID\nA,B\n").unwrap();
        assert_eq!(records, vec![ContactRecord::new("A", "B")]);
    }

    #[test]
    fn empty_optional_fields_default() {
        let records = parse(
            "Person_ID,Contact_ID,Infection_Status,Days_Infected\n\
             A,B,,\n",
        )
        .unwrap();
        assert_eq!(records, vec![ContactRecord::new("A", "B")]);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = parse(
            "Person_ID,Name,Age,City,Contact_ID,Infection_Status,Days_Infected\n\
             1,A,25,NY,2,Infected,0\n",
        )
        .unwrap();
        assert_eq!(
            records,
            vec![ContactRecord::seeded("1", "2", Status::Infected, 0)]
        );
    }

    #[test]
    fn recovered_seed_is_accepted() {
        let records = parse(
            "Person_ID,Contact_ID,Infection_Status\n\
             A,B,Recovered\n",
        )
        .unwrap();
        assert_eq!(records[0].seed_status, Some(Status::Recovered));
    }

    #[test]
    fn missing_person_id_fails() {
        let error = parse("Person_ID,Contact_ID\n,B\n").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("record 1"), "{message}");
        assert!(message.contains("Person_ID"), "{message}");
    }

    #[test]
    fn missing_contact_id_fails() {
        let error = parse("Person_ID,Contact_ID\nA,\n").unwrap_err();
        assert!(error.to_string().contains("Contact_ID"));
    }

    #[test]
    fn unrecognized_status_fails() {
        let error = parse(
            "Person_ID,Contact_ID,Infection_Status\n\
             A,B,Sick\n",
        )
        .unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Infection_Status"), "{message}");
        assert!(message.contains("`Sick`"), "{message}");
    }

    #[test]
    fn non_numeric_days_fails() {
        let error = parse(
            "Person_ID,Contact_ID,Infection_Status,Days_Infected\n\
             A,B,Infected,three\n",
        )
        .unwrap_err();
        assert!(error.to_string().contains("Days_Infected"));
    }

    #[test]
    fn negative_days_fails() {
        let error = parse(
            "Person_ID,Contact_ID,Infection_Status,Days_Infected\n\
             A,B,Infected,-1\n",
        )
        .unwrap_err();
        assert!(error.to_string().contains("Days_Infected"));
    }

    #[test]
    fn second_bad_row_is_named() {
        let error = parse(
            "Person_ID,Contact_ID\n\
             A,B\n\
             ,B\n",
        )
        .unwrap_err();
        assert!(error.to_string().contains("record 2"));
    }

    #[test]
    fn reads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Person_ID,Contact_ID\nA,B\n").unwrap();

        let records = read_records_from_path(file.path()).unwrap();
        assert_eq!(records, vec![ContactRecord::new("A", "B")]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = read_records_from_path("no/such/file.csv").unwrap_err();
        assert!(matches!(error, EpiError::IoError(_)));
    }
}
