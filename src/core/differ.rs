use crate::models::{
    AttributeValue, CohortCategory, ComparisonAttribute, ComparisonTable, Delta, DiffTriple,
    ProgramProfile,
};

pub const LABEL_NAME: &str = "name";
pub const LABEL_FACULTY: &str = "Facultad";
pub const LABEL_DESCRIPTION: &str = "Descripción";
pub const LABEL_SEMESTERS: &str = "Semestre";
pub const LABEL_CREDITS: &str = "Créditos";

/// Response label for the student count of a cohort
pub fn status_count_label(category: CohortCategory) -> &'static str {
    match category {
        CohortCategory::Pursuing => "Estudiantes cursando",
        CohortCategory::Graduated => "Estudiantes graduados",
        CohortCategory::Expelled => "Estudiantes expulsados",
        CohortCategory::Resigned => "Estudiantes dimitidos",
    }
}

/// Pair two values; only integer/integer pairs carry a delta (`left - right`)
#[inline]
pub fn diff_values(left: &AttributeValue, right: &AttributeValue) -> DiffTriple {
    let delta = match (left, right) {
        (AttributeValue::Integer(a), AttributeValue::Integer(b)) => Delta::Numeric(a - b),
        _ => Delta::Empty,
    };

    DiffTriple {
        left: left.clone(),
        delta,
        right: right.clone(),
    }
}

/// Side-by-side view of two entities' attributes
///
/// Rows follow the label order of `left`. A label absent from `right` is paired with null.
pub fn diff_attributes(left: &[ComparisonAttribute], right: &[ComparisonAttribute]) -> ComparisonTable {
    let mut table = ComparisonTable::with_capacity(left.len());

    for attribute in left {
        let triple = match right.iter().find(|candidate| candidate.label == attribute.label) {
            Some(candidate) => diff_values(&attribute.value, &candidate.value),
            None => diff_values(&attribute.value, &AttributeValue::Null),
        };

        table.push(attribute.label.clone(), triple);
    }

    table
}

/// Attributes of a program in comparison order
pub fn program_attributes(program: &ProgramProfile) -> Vec<ComparisonAttribute> {
    let mut attributes = vec![
        ComparisonAttribute::new(LABEL_NAME, program.name.clone()),
        ComparisonAttribute::new(LABEL_FACULTY, program.faculty.clone()),
        ComparisonAttribute::new(LABEL_DESCRIPTION, program.description.clone()),
        ComparisonAttribute::new(LABEL_SEMESTERS, program.semesters),
        ComparisonAttribute::new(LABEL_CREDITS, program.credits),
    ];

    attributes.extend(CohortCategory::ALL.iter().map(|&category| {
        ComparisonAttribute::new(
            status_count_label(category),
            *program.status_counts.get(category),
        )
    }));

    attributes
}

/// Compare two programs; deltas are `first - second`
pub fn compare_programs(first: &ProgramProfile, second: &ProgramProfile) -> ComparisonTable {
    diff_attributes(&program_attributes(first), &program_attributes(second))
}
