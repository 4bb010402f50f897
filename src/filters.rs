// src/filters.rs
//! Filter selection for the jobs list and its mapping to backend query parameters.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Freelance,
    Internship,
}

impl EmploymentType {
    pub const ALL: [EmploymentType; 4] = [
        EmploymentType::FullTime,
        EmploymentType::PartTime,
        EmploymentType::Freelance,
        EmploymentType::Internship,
    ];

    /// Tag understood by the backend
    pub fn tag(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "FULLTIME",
            EmploymentType::PartTime => "PARTTIME",
            EmploymentType::Freelance => "FREELANCE",
            EmploymentType::Internship => "INTERNSHIP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmploymentType::FullTime => "Full Time",
            EmploymentType::PartTime => "Part Time",
            EmploymentType::Freelance => "Freelance",
            EmploymentType::Internship => "Internship",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EmploymentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_uppercase();
        match normalized.as_str() {
            "FULLTIME" => Ok(EmploymentType::FullTime),
            "PARTTIME" => Ok(EmploymentType::PartTime),
            "FREELANCE" => Ok(EmploymentType::Freelance),
            "INTERNSHIP" => Ok(EmploymentType::Internship),
            _ => anyhow::bail!(
                "Unknown employment type: {}. Use FULLTIME, PARTTIME, FREELANCE or INTERNSHIP",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SalaryTier {
    #[default]
    Lpa10,
    Lpa20,
    Lpa30,
    Lpa40,
}

impl SalaryTier {
    pub const ALL: [SalaryTier; 4] = [
        SalaryTier::Lpa10,
        SalaryTier::Lpa20,
        SalaryTier::Lpa30,
        SalaryTier::Lpa40,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SalaryTier::Lpa10 => "10LPA",
            SalaryTier::Lpa20 => "20LPA",
            SalaryTier::Lpa30 => "30LPA",
            SalaryTier::Lpa40 => "40LPA",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SalaryTier::Lpa10 => "10 LPA and above",
            SalaryTier::Lpa20 => "20 LPA and above",
            SalaryTier::Lpa30 => "30 LPA and above",
            SalaryTier::Lpa40 => "40 LPA and above",
        }
    }

    /// Minimum package in rupees per annum
    pub fn minimum_package(&self) -> u32 {
        match self {
            SalaryTier::Lpa10 => 1_000_000,
            SalaryTier::Lpa20 => 2_000_000,
            SalaryTier::Lpa30 => 3_000_000,
            SalaryTier::Lpa40 => 4_000_000,
        }
    }
}

impl fmt::Display for SalaryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SalaryTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace(' ', "").to_uppercase();
        let digits = normalized.trim_end_matches("LPA");
        match digits {
            "10" | "1000000" => Ok(SalaryTier::Lpa10),
            "20" | "2000000" => Ok(SalaryTier::Lpa20),
            "30" | "3000000" => Ok(SalaryTier::Lpa30),
            "40" | "4000000" => Ok(SalaryTier::Lpa40),
            _ => anyhow::bail!("Unknown salary range: {}. Use 10LPA, 20LPA, 30LPA or 40LPA", s),
        }
    }
}

/// What the user picked in the filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    employment_types: BTreeSet<EmploymentType>,
    salary_tier: SalaryTier,
    search: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_employment_types<I>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = EmploymentType>,
    {
        self.employment_types.extend(types);
        self
    }

    pub fn with_salary_tier(mut self, tier: SalaryTier) -> Self {
        self.salary_tier = tier;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn set_employment_type(&mut self, employment_type: EmploymentType, checked: bool) {
        if checked {
            self.employment_types.insert(employment_type);
        } else {
            self.employment_types.remove(&employment_type);
        }
    }

    /// Flip one checkbox and report whether it is now checked
    pub fn toggle_employment_type(&mut self, employment_type: EmploymentType) -> bool {
        let checked = !self.employment_types.contains(&employment_type);
        self.set_employment_type(employment_type, checked);
        checked
    }

    pub fn set_salary_tier(&mut self, tier: SalaryTier) {
        self.salary_tier = tier;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn is_checked(&self, employment_type: EmploymentType) -> bool {
        self.employment_types.contains(&employment_type)
    }

    pub fn employment_types(&self) -> impl Iterator<Item = EmploymentType> + '_ {
        self.employment_types.iter().copied()
    }

    pub fn salary_tier(&self) -> SalaryTier {
        self.salary_tier
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn to_query(&self) -> JobQuery {
        JobQuery {
            employment_type: self
                .employment_types
                .iter()
                .map(EmploymentType::tag)
                .collect::<Vec<_>>()
                .join(","),
            minimum_package: self.salary_tier.minimum_package(),
            search: self.search.clone(),
        }
    }
}

/// Query parameters for `GET /jobs`. An empty `employment_type` means no filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub employment_type: String,
    pub minimum_package: u32,
    pub search: String,
}

impl Default for JobQuery {
    fn default() -> Self {
        FilterSelection::default().to_query()
    }
}

impl JobQuery {
    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("employment_type", self.employment_type.clone()),
            ("minimum_package", self.minimum_package.to_string()),
            ("search", self.search.clone()),
        ]
    }
}
