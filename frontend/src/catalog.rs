use crate::pages::countdown::Countdown;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub justification: &'static str,
    pub features: Vec<&'static str>,
    pub guarantee: &'static str,
    pub popular: bool,
    pub savings: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuccessStory {
    pub company: &'static str,
    pub industry: &'static str,
    pub employees: u32,
    pub result: &'static str,
    pub savings: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// Everything the landing page shows that is not user state.
///
/// Built once in `App` and handed down as `Rc<Catalog>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    pub budget_options: Vec<SelectOption>,
    pub employee_options: Vec<SelectOption>,
    pub timeline_options: Vec<SelectOption>,
    pub challenges: Vec<&'static str>,
    pub pricing: Vec<PricingTier>,
    pub faqs: Vec<FaqEntry>,
    pub stories: Vec<SuccessStory>,
    pub offer_countdown: Countdown,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            budget_options: vec![
                SelectOption { value: "under-10k", label: "Under €10,000" },
                SelectOption { value: "10k-25k", label: "€10,000 - €25,000" },
                SelectOption { value: "25k-50k", label: "€25,000 - €50,000" },
                SelectOption { value: "50k-100k", label: "€50,000 - €100,000" },
                SelectOption { value: "over-100k", label: "Over €100,000" },
            ],
            employee_options: vec![
                SelectOption { value: "1-10", label: "1-10 employees" },
                SelectOption { value: "11-50", label: "11-50 employees" },
                SelectOption { value: "51-100", label: "51-100 employees" },
                SelectOption { value: "101-250", label: "101-250 employees" },
                SelectOption { value: "250+", label: "More than 250 employees" },
            ],
            timeline_options: vec![
                SelectOption { value: "asap", label: "As soon as possible" },
                SelectOption { value: "1-3months", label: "In 1-3 months" },
                SelectOption { value: "3-6months", label: "In 3-6 months" },
                SelectOption { value: "6-12months", label: "In 6-12 months" },
                SelectOption { value: "planning", label: "Just gathering information" },
            ],
            challenges: vec![
                "Too many different software solutions",
                "High IT costs and license fees",
                "Manual processes and duplicate data entry",
                "Lack of transparency and reporting",
                "Difficult integration of existing systems",
                "Employee resistance to new technology",
                "Unclear digitalization strategy",
                "Vendor lock-in with current providers",
            ],
            pricing: vec![
                PricingTier {
                    name: "Starter",
                    price: "€12,999",
                    period: "one-time",
                    description: "For companies with up to 25 employees",
                    justification: "Replaces 3-5 separate software licenses",
                    features: vec![
                        "Strategy consulting and digitalization concept",
                        "Full ERP implementation (6-8 weeks)",
                        "Data integration from existing systems",
                        "Process automation (5 core workflows)",
                        "Employee training (3 intensive days)",
                        "Go-live support with emergency help",
                    ],
                    guarantee: "Professional support",
                    popular: false,
                    savings: None,
                },
                PricingTier {
                    name: "Professional",
                    price: "€24,999",
                    period: "one-time",
                    description: "For growing companies with 25-100 employees",
                    justification: "Less than 2 years of typical ERP license costs",
                    features: vec![
                        "Everything in Starter",
                        "Extended strategy consulting and roadmap",
                        "Multi-site setup and permission concept",
                        "API integrations (e-commerce, accounting, ...)",
                        "Business intelligence dashboard",
                        "Change management program (8 weeks)",
                    ],
                    guarantee: "Professional support",
                    popular: true,
                    savings: Some("Best cost-benefit ratio"),
                },
                PricingTier {
                    name: "Enterprise",
                    price: "€49,999",
                    period: "one-time",
                    description: "For companies with more than 100 employees",
                    justification: "A fraction of the cost of an SAP rollout",
                    features: vec![
                        "Everything in Professional",
                        "C-level strategy and transformation management",
                        "Integration of the complete system landscape",
                        "Dedicated project manager",
                        "Executive reporting and KPI dashboards",
                        "12 months of premium support included",
                    ],
                    guarantee: "Premium support included",
                    popular: false,
                    savings: Some("Maximum efficiency and ROI"),
                },
            ],
            faqs: vec![
                FaqEntry {
                    question: "How long does the implementation take?",
                    answer: "Most projects are finished within 6-12 weeks. We work towards measurable results within the first 90 days.",
                },
                FaqEntry {
                    question: "Which software do you recommend?",
                    answer: "We work with a modern all-in-one platform without vendor lock-in that already serves more than 7 million users. We discuss the concrete recommendation in your free consultation.",
                },
                FaqEntry {
                    question: "What does ongoing support cost?",
                    answer: "Optional support packages start at €499/month, well below the license costs of conventional ERP systems.",
                },
                FaqEntry {
                    question: "Does this work in my industry?",
                    answer: "Yes. We have digitalized more than 150 companies, from trades through manufacturing to services.",
                },
                FaqEntry {
                    question: "What happens to our existing data?",
                    answer: "We migrate all of your important data securely and completely so you can keep working without interruption.",
                },
                FaqEntry {
                    question: "How do you measure success?",
                    answer: "Together we define clear KPIs such as time saved, cost reduction, revenue growth and process efficiency. Regular reports show the progress.",
                },
            ],
            stories: vec![SuccessStory {
                company: "Bavaria Heizungstechnik GmbH",
                industry: "Heating and plumbing contractor",
                employees: 15,
                result: "Six-figure profit reached",
                savings: "Seven-figure revenue generated",
                challenge: "Manual quoting, inefficient scheduling and no customer overview across 70+ heat pump installations per year",
                solution: "Integrated ERP with automated quoting, digital scheduling and a CRM for heating and plumbing projects",
                quote: "They turned our business around. From manual processes to six-figure profits, we never thought that was possible.",
                name: "Zoran Pozderovic",
                role: "Managing Director",
            }],
            offer_countdown: Countdown::new(6, 23, 59, 59),
        }
    }

    pub fn is_known_challenge(&self, label: &str) -> bool {
        self.challenges.iter().any(|c| *c == label)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
