//! Built-in workflow descriptions to start from.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowTemplate {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: &[WorkflowTemplate] = &[
    WorkflowTemplate {
        slug: "product-development",
        title: "Product Development",
        description: "A product team identifies market needs → Research and ideation → Feature prioritization → \
                      Design wireframes and prototypes → Development sprints → QA and testing → \
                      User feedback sessions → Release → Post-release monitoring",
    },
    WorkflowTemplate {
        slug: "sales-process",
        title: "Sales Process",
        description: "Lead generation → Lead qualification → Initial contact → Needs assessment → \
                      Demo or proposal → Negotiation → Close deal → Onboarding → Follow-up and retention",
    },
    WorkflowTemplate {
        slug: "content-marketing",
        title: "Content Marketing",
        description: "Content strategy planning → Topic research → Content creation → Internal review → \
                      Revisions → Publishing → Distribution across channels → Performance monitoring → \
                      Content repurposing",
    },
    WorkflowTemplate {
        slug: "customer-support",
        title: "Customer Support",
        description: "Customer submits ticket → Automated categorization → Priority assignment → Agent review → \
                      Research solution → Resolution implementation → Customer verification → \
                      Feedback collection → Knowledge base update",
    },
    WorkflowTemplate {
        slug: "recruitment",
        title: "Recruitment",
        description: "Job requisition → Job posting → Resume screening → Initial interview → Skills assessment → \
                      Team interviews → Reference checks → Offer negotiation → Onboarding process",
    },
];

/// Look a template up by slug or by title, ignoring case.
#[must_use]
pub fn find(name: &str) -> Option<&'static WorkflowTemplate> {
    let name = name.trim();
    TEMPLATES
        .iter()
        .find(|t| t.slug.eq_ignore_ascii_case(name) || t.title.eq_ignore_ascii_case(name))
}
