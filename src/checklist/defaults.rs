//! Built-in BC Bid readiness checklist

use super::definition::{
    ChecklistCategory, ChecklistDefinition, ChecklistItem, HelpContact, QuickLink,
};

fn category(
    id: &str,
    title: &str,
    description: &str,
    expanded_by_default: bool,
    items: Vec<ChecklistItem>,
) -> ChecklistCategory {
    ChecklistCategory {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        expanded_by_default,
        items,
    }
}

fn quick_link(label: &str, url: &str) -> QuickLink {
    QuickLink {
        label: label.to_string(),
        url: url.to_string(),
    }
}

pub(crate) fn bc_bid_checklist() -> ChecklistDefinition {
    const VARIES: &str = "Varies by coverage";

    let registration = vec![
        ChecklistItem::new(
            "bceid",
            "Obtain Business BCeID",
            "Required for BC Bid login. Allow several weeks for processing.",
        )
        .with_link("https://www.bceid.ca/", "BCeID Portal")
        .with_estimated_time("2-4 weeks"),
        ChecklistItem::new(
            "business-registration",
            "Register Business with BC Registries",
            "Sole proprietorships and partnerships must register.",
        )
        .with_link("https://www.bcregistry.gov.bc.ca/", "BC Registries")
        .with_estimated_time("1-2 days")
        .with_cost("$40 (sole prop) + $30 (name)"),
        ChecklistItem::new(
            "bcbid-account",
            "Create BC Bid Account",
            "Register on BC Bid portal. First registrant becomes Supplier Admin.",
        )
        .with_link("https://www.bcbid.gov.bc.ca/", "BC Bid Portal")
        .with_estimated_time("1-3 days"),
        ChecklistItem::new(
            "commodity-codes",
            "Subscribe to UNSPSC Commodity Codes",
            "Select relevant codes to receive opportunity notifications.",
        )
        .with_link(
            "https://www2.gov.bc.ca/gov/content/bc-procurement-resources/bc-bid-resources/bc-bid-user-guides/bc-bid-supplier-guide",
            "Supplier Guide",
        )
        .with_estimated_time("30 minutes"),
    ];

    let compliance = vec![
        ChecklistItem::new(
            "worksafebc",
            "Register with WorkSafeBC",
            "Obtain clearance letter confirming registration and premiums paid.",
        )
        .with_link("https://www.worksafebc.com/", "WorkSafeBC")
        .with_estimated_time("1-2 weeks"),
        ChecklistItem::new(
            "worksafebc-clearance",
            "Obtain WorkSafeBC Clearance Letter",
            "Required before commencement of work. Renew annually.",
        )
        .with_link(
            "https://www.worksafebc.com/en/insurance/need-coverage/clearance-letters",
            "Clearance Letters",
        )
        .with_estimated_time("1-3 days"),
        ChecklistItem::new(
            "tax-verification",
            "Prepare Tax Verification Letter Access",
            "Required for contracts $100K+. Obtain from eTaxBC portal.",
        )
        .with_link(
            "https://www2.gov.bc.ca/gov/content/taxes/etaxbc",
            "eTaxBC Portal",
        )
        .with_estimated_time("Instant (online)"),
    ];

    let insurance = vec![
        ChecklistItem::new(
            "cgl",
            "Commercial General Liability (CGL) Insurance",
            "Minimum $2,000,000 per occurrence. Include Blanket Contractual Liability.",
        )
        .with_estimated_time("1-2 weeks")
        .with_cost(VARIES),
        ChecklistItem::new(
            "auto-liability",
            "Automobile Liability Insurance",
            "Minimum $5,000,000 if services require vehicle use.",
        )
        .with_estimated_time("1-2 weeks")
        .with_cost(VARIES),
        ChecklistItem::new(
            "eo-insurance",
            "Errors & Omissions Insurance (Professional Services)",
            "Required for professional/consulting services contracts.",
        )
        .with_estimated_time("1-2 weeks")
        .with_cost(VARIES),
        ChecklistItem::new(
            "insurance-certificates",
            "Prepare Insurance Certificates",
            "Have current certificates ready for upload to BC Bid.",
        )
        .with_estimated_time("1-3 days"),
    ];

    let bonding = vec![
        ChecklistItem::new(
            "surety-relationship",
            "Establish Surety Company Relationship",
            "Required for bid bonds, performance bonds, and payment bonds.",
        )
        .with_link("https://bccassn.com/", "BC Construction Association")
        .with_estimated_time("2-4 weeks"),
        ChecklistItem::new(
            "financial-statements",
            "Prepare 3 Years of Financial Statements",
            "Reviewed or audited statements required for surety underwriting.",
        )
        .with_estimated_time("Varies"),
        ChecklistItem::new(
            "bonding-capacity",
            "Confirm Bonding Capacity",
            "Ensure capacity supports project sizes you plan to bid on.",
        )
        .with_estimated_time("1-2 weeks"),
    ];

    let documents = vec![
        ChecklistItem::new(
            "company-profile",
            "Prepare Company Profile",
            "Standard company overview, capabilities, and experience.",
        )
        .with_estimated_time("2-4 hours"),
        ChecklistItem::new(
            "past-projects",
            "Document Past Project Experience",
            "Portfolio of relevant completed projects with references.",
        )
        .with_estimated_time("4-8 hours"),
        ChecklistItem::new(
            "key-personnel",
            "Prepare Key Personnel Resumes",
            "Resumes of key team members who will work on projects.",
        )
        .with_estimated_time("2-4 hours"),
        ChecklistItem::new(
            "references",
            "Gather Client References",
            "Contact info for 3+ clients who can provide references.",
        )
        .with_estimated_time("1-2 hours"),
    ];

    let optional = vec![
        ChecklistItem::new(
            "gold-seal",
            "Gold Seal Certification (Construction)",
            "Recommended for Site Superintendents on projects over $5M.",
        )
        .with_link(
            "https://www.goldsealcertification.com/",
            "Gold Seal Program",
        )
        .with_estimated_time("Several months"),
        ChecklistItem::new(
            "indigenous-procurement",
            "Indigenous Procurement Initiative Registration",
            "Program still developing. Contact for current opportunities.",
        )
        .with_link("mailto:ipi@gov.bc.ca", "Contact IPI"),
        ChecklistItem::new(
            "bcspi",
            "BC Social Procurement Initiative",
            "Local government procurement opportunities.",
        )
        .with_link("https://bcspi.ca/", "BCSPI Website"),
    ];

    ChecklistDefinition {
        categories: vec![
            category(
                "registration",
                "1. Registration & Business Setup",
                "Essential registrations to get started",
                true,
                registration,
            ),
            category(
                "compliance",
                "2. Compliance Requirements",
                "Mandatory compliance for BC government contracts",
                true,
                compliance,
            ),
            category(
                "insurance",
                "3. Insurance Requirements",
                "Standard insurance coverage for government contracts",
                true,
                insurance,
            ),
            category(
                "bonding",
                "4. Bonding (Construction Projects)",
                "Required for construction contracts over threshold values",
                true,
                bonding,
            ),
            category(
                "documents",
                "5. Bid Document Preparation",
                "Standard documents to have ready for submissions",
                true,
                documents,
            ),
            category(
                "optional",
                "6. Optional / Specialized",
                "Additional certifications and programs",
                false,
                optional,
            ),
        ],
        quick_links: vec![
            quick_link("BC Bid Portal", "https://www.bcbid.gov.bc.ca/"),
            quick_link("BCeID", "https://www.bceid.ca/"),
            quick_link("WorkSafeBC", "https://www.worksafebc.com/"),
            quick_link("BC Registries", "https://www.bcregistry.gov.bc.ca/"),
        ],
        help_contacts: vec![
            HelpContact {
                name: "BC Bid Help Desk".to_string(),
                email: Some("bcbid@gov.bc.ca".to_string()),
                phone: Some("250-387-7301".to_string()),
            },
            HelpContact {
                name: "BC Registries".to_string(),
                email: None,
                phone: Some("1-877-370-1033".to_string()),
            },
        ],
    }
}
