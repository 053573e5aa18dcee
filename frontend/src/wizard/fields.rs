use std::collections::BTreeSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Budget,
    Employees,
    Timeline,
    Name,
    Company,
    Email,
    Phone,
    Challenges,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Budget => "budget",
            Field::Employees => "employees",
            Field::Timeline => "timeline",
            Field::Name => "name",
            Field::Company => "company",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Challenges => "challenges",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Qualification,
    Contact,
    Challenges,
}

impl Step {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            Step::Qualification => 1,
            Step::Contact => 2,
            Step::Challenges => 3,
        }
    }

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Qualification => Some(Step::Contact),
            Step::Contact => Some(Step::Challenges),
            Step::Challenges => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Qualification => None,
            Step::Contact => Some(Step::Qualification),
            Step::Challenges => Some(Step::Contact),
        }
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Qualification => "Qualification",
            Step::Contact => "Contact details",
            Step::Challenges => "Your biggest challenges",
        }
    }

    pub fn progress_percent(self) -> u32 {
        (f64::from(self.number()) / f64::from(Self::COUNT) * 100.0).round() as u32
    }
}

/// Everything the visitor has entered so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeadFields {
    pub budget: String,
    pub employees: String,
    pub timeline: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub challenges: BTreeSet<String>,
}

impl LeadFields {
    /// Value of a single-valued field. The challenge set has no text value.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Budget => &self.budget,
            Field::Employees => &self.employees,
            Field::Timeline => &self.timeline,
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Challenges => "",
        }
    }

    /// Returns false for `Challenges`, which is only changed by toggling.
    pub fn set_text(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::Budget => &mut self.budget,
            Field::Employees => &mut self.employees,
            Field::Timeline => &mut self.timeline,
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Challenges => return false,
        };
        *slot = value;
        true
    }

    pub fn toggle_challenge(&mut self, label: &str) {
        if !self.challenges.remove(label) {
            self.challenges.insert(label.to_string());
        }
    }

    pub fn has_challenge(&self, label: &str) -> bool {
        self.challenges.contains(label)
    }
}
