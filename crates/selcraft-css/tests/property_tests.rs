//! Property tests: arbitrary append sequences against a simple reference model.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selcraft_css::selector::{
    PartKind, SelectorBuilder, SelectorError, attr, class, element, id, pseudo_class,
    pseudo_element,
};
use strum::IntoEnumIterator;

/// A part kind with a short value, generated uniformly.
#[derive(Debug, Clone)]
struct Step {
    kind: PartKind,
    value: String,
}

impl Arbitrary for Step {
    fn arbitrary(g: &mut Gen) -> Self {
        let kinds: Vec<PartKind> = PartKind::iter().collect();
        let kind = *g.choose(&kinds).unwrap();
        let value = (*g.choose(&["a", "b", "main", "x-y", "nth-child(2)"]).unwrap()).to_string();
        Self { kind, value }
    }
}

/// What the builder should do with `steps`, computed without the builder.
fn model(steps: &[Step]) -> Result<String, SelectorError> {
    let mut highest: Option<PartKind> = None;
    let mut seen: Vec<PartKind> = Vec::new();
    let mut rendered = String::new();

    for step in steps {
        if step.kind.is_singleton() && seen.contains(&step.kind) {
            return Err(SelectorError::Duplicate { kind: step.kind });
        }
        if let Some(previous) = highest.filter(|previous| step.kind < *previous) {
            return Err(SelectorError::Order {
                attempted: step.kind,
                previous,
            });
        }
        highest = highest.max(Some(step.kind));
        seen.push(step.kind);
        rendered.push_str(step.kind.prefix());
        rendered.push_str(&step.value);
        rendered.push_str(step.kind.suffix());
    }

    Ok(rendered)
}

fn run(first: &Step, rest: &[Step]) -> Result<SelectorBuilder, SelectorError> {
    let value = first.value.as_str();
    let builder = match first.kind {
        PartKind::Element => element(value),
        PartKind::Id => id(value),
        PartKind::Class => class(value),
        PartKind::Attribute => attr(value),
        PartKind::PseudoClass => pseudo_class(value),
        PartKind::PseudoElement => pseudo_element(value),
    };

    rest.iter().try_fold(builder, |builder, step| {
        builder.append(step.kind, step.value.as_str())
    })
}

#[quickcheck]
fn builder_agrees_with_model(first: Step, rest: Vec<Step>) -> bool {
    let mut all = vec![first.clone()];
    all.extend(rest.iter().cloned());

    let expected = model(&all);
    let actual = run(&first, &rest).map(|builder| builder.stringify());
    expected == actual
}

#[quickcheck]
fn successful_builds_are_rank_ordered(first: Step, rest: Vec<Step>) -> bool {
    let Ok(builder) = run(&first, &rest) else {
        return true;
    };

    let parts = builder.parts();
    let ordered = parts.windows(2).all(|pair| pair[0].kind <= pair[1].kind);
    let singletons_unique = PartKind::iter()
        .filter(|kind| kind.is_singleton())
        .all(|kind| builder.count(kind) <= 1);
    ordered && singletons_unique && parts.len() == rest.len() + 1
}

#[quickcheck]
fn stringify_is_stable(first: Step, rest: Vec<Step>) -> bool {
    let Ok(builder) = run(&first, &rest) else {
        return true;
    };
    builder.stringify() == builder.stringify() && builder.stringify() == builder.to_string()
}
