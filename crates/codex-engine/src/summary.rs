use codex_types::{AffinityCount, Entity, GradeCount, RARE_GRADE_THRESHOLD, Summary};
use std::collections::{BTreeSet, HashMap};

/// Affinities are counted case-insensitively under their upper-cased form.
pub fn normalize_affinity(affinity: &str) -> String {
    affinity.to_uppercase()
}

pub fn summarize(entities: &[Entity]) -> Summary {
    if entities.is_empty() {
        return Summary::default();
    }

    let mut grade_counts: HashMap<i64, usize> = HashMap::new();
    let mut affinity_counts: HashMap<String, usize> = HashMap::new();
    let mut affinity_names = BTreeSet::new();

    let mut rare = 0;
    let mut highest_grade = 0;
    let mut highest_holder = None;

    for entity in entities {
        highest_grade = highest_grade.max(entity.grade);
        // Ties move the holder forward: the last entity at the maximum wins.
        if entity.grade == highest_grade {
            highest_holder = Some(entity.name.clone());
        }
        if entity.grade >= RARE_GRADE_THRESHOLD {
            rare += 1;
        }

        *grade_counts.entry(entity.grade).or_insert(0) += 1;

        for affinity in &entity.affinities {
            if affinity.is_empty() {
                continue;
            }
            let key = normalize_affinity(affinity);
            *affinity_counts.entry(key.clone()).or_insert(0) += 1;
            affinity_names.insert(key);
        }
    }

    let mut grade_counts: Vec<GradeCount> = grade_counts
        .into_iter()
        .map(|(grade, count)| GradeCount { grade, count })
        .collect();
    grade_counts.sort_by(|lhs, rhs| rhs.grade.cmp(&lhs.grade));

    let mut affinity_counts: Vec<AffinityCount> = affinity_counts
        .into_iter()
        .map(|(affinity, count)| AffinityCount { affinity, count })
        .collect();
    affinity_counts.sort_by(|lhs, rhs| {
        rhs.count
            .cmp(&lhs.count)
            .then_with(|| lhs.affinity.cmp(&rhs.affinity))
    });

    Summary {
        total: entities.len(),
        rare,
        highest_grade,
        highest_holder,
        affinity_names: affinity_names.into_iter().collect(),
        grade_counts,
        affinity_counts,
    }
}

pub fn top_entities(entities: &[Entity], n: usize) -> Vec<&Entity> {
    let mut ranking: Vec<&Entity> = entities.iter().collect();
    ranking.sort_by(|lhs, rhs| {
        rhs.grade
            .cmp(&lhs.grade)
            .then_with(|| lhs.name.cmp(&rhs.name))
    });
    ranking.truncate(n);
    ranking
}
