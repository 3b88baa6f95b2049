use super::normalizer::split_field;
use super::Career;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_careers<R: Read>(reader: R) -> Result<Vec<Career>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut careers = Vec::new();

    for record in csv_reader.deserialize::<CareerRow>() {
        let row = record?;
        careers.push(row.into_career());
    }

    Ok(careers)
}

#[derive(Debug, Deserialize)]
struct CareerRow {
    #[serde(rename = "Career")]
    name: String,
    #[serde(rename = "Courses", deserialize_with = "empty_string_as_none")]
    courses: Option<String>,
    #[serde(rename = "Skills", deserialize_with = "empty_string_as_none")]
    skills: Option<String>,
    #[serde(rename = "Interests", deserialize_with = "empty_string_as_none")]
    interests: Option<String>,
}

impl CareerRow {
    fn into_career(self) -> Career {
        Career {
            name: self.name,
            courses: split_field(self.courses.as_deref()),
            skills: split_field(self.skills.as_deref()),
            interests: split_field(self.interests.as_deref()),
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
