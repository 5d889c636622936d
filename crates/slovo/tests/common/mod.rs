//! Shared fixtures: a table analyzer with hand-entered Russian paradigms.

use slovo::morph::{Overrides, Reading, TableAnalyzer, WordFactory};
use slovo::{Dictionary, Grammeme as G, PartOfSpeech as P};

const CASES: [G; 6] = [
    G::Nominative,
    G::Genitive,
    G::Dative,
    G::Accusative,
    G::Instrumental,
    G::Prepositional,
];
const GENDERS: [G; 3] = [G::Masculine, G::Feminine, G::Neuter];
const PERSONS: [G; 3] = [G::First, G::Second, G::Third];
const NUMBERS: [G; 2] = [G::Singular, G::Plural];

/// Forms keyed by `[case, number]`, singular cases first.
fn by_case_number(analyzer: &mut TableAnalyzer, lemma: &str, forms: [&str; 12]) {
    let mut forms = forms.iter();
    for number in NUMBERS {
        for case in CASES {
            if let Some(form) = forms.next() {
                analyzer.add_form(lemma, &[case, number], form);
            }
        }
    }
}

/// Adjective table: `[case, gender, singular]` per gender, then `[case, plural]`.
fn adjective(analyzer: &mut TableAnalyzer, lemma: &str, extra: &[G], forms: [&str; 24]) {
    let mut forms = forms.iter();
    for gender in GENDERS {
        for case in CASES {
            if let Some(form) = forms.next() {
                let mut key = extra.to_vec();
                key.extend([case, gender, G::Singular]);
                analyzer.add_form(lemma, &key, form);
            }
        }
    }
    for case in CASES {
        if let Some(form) = forms.next() {
            let mut key = extra.to_vec();
            key.extend([case, G::Plural]);
            analyzer.add_form(lemma, &key, form);
        }
    }
}

/// Past forms (three genders, plural).
fn past(analyzer: &mut TableAnalyzer, lemma: &str, forms: [&str; 4]) {
    for (gender, form) in GENDERS.iter().zip(forms) {
        analyzer.add_form(lemma, &[G::Past, *gender, G::Singular], form);
    }
    analyzer.add_form(lemma, &[G::Past, G::Plural], forms[3]);
}

/// Personal forms of one tense: person × number.
fn personal(analyzer: &mut TableAnalyzer, lemma: &str, tense: G, forms: [&str; 6]) {
    let mut forms = forms.iter();
    for person in PERSONS {
        for number in NUMBERS {
            if let Some(form) = forms.next() {
                analyzer.add_form(lemma, &[tense, person, number], form);
            }
        }
    }
}

fn noun_reading(grammemes: &[G]) -> Reading {
    Reading::new(P::Noun, grammemes)
}

fn adjective_reading(grammemes: &[G]) -> Reading {
    Reading::new(P::Adjective, grammemes)
}

fn verb_reading(grammemes: &[G]) -> Reading {
    Reading::new(P::Verb, grammemes)
}

/// The fixture analyzer.
pub fn analyzer() -> TableAnalyzer {
    let mut a = TableAnalyzer::new();

    // Nouns
    a.add_reading(
        "обезьянка",
        noun_reading(&[G::Nominative, G::Singular, G::Feminine, G::Animate]),
    );
    by_case_number(
        &mut a,
        "обезьянка",
        [
            "обезьянка", "обезьянки", "обезьянке", "обезьянку", "обезьянкой", "обезьянке",
            "обезьянки", "обезьянок", "обезьянкам", "обезьянок", "обезьянками", "обезьянках",
        ],
    );
    a.add_reading("обезьянки", noun_reading(&[G::Genitive, G::Singular, G::Feminine]));
    a.add_reading("обезьянки", noun_reading(&[G::Nominative, G::Plural, G::Feminine]));

    a.add_reading("монета", noun_reading(&[G::Nominative, G::Singular, G::Feminine]));
    by_case_number(
        &mut a,
        "монета",
        [
            "монета", "монеты", "монете", "монету", "монетой", "монете", "монеты", "монет",
            "монетам", "монеты", "монетами", "монетах",
        ],
    );

    a.add_reading("тень", noun_reading(&[G::Nominative, G::Singular, G::Feminine]));
    a.add_reading("тень", noun_reading(&[G::Accusative, G::Singular, G::Feminine]));
    by_case_number(
        &mut a,
        "тень",
        [
            "тень", "тени", "тени", "тень", "тенью", "тени", "тени", "теней", "теням", "тени",
            "тенями", "тенях",
        ],
    );

    a.add_reading("крыса", noun_reading(&[G::Nominative, G::Singular, G::Feminine]));
    by_case_number(
        &mut a,
        "крыса",
        [
            "крыса", "крысы", "крысе", "крысу", "крысой", "крысе", "крысы", "крыс", "крысам",
            "крыс", "крысами", "крысах",
        ],
    );

    a.add_reading("автор", noun_reading(&[G::Nominative, G::Singular, G::Masculine]));
    a.add_reading("автора", noun_reading(&[G::Genitive, G::Singular, G::Masculine]));
    a.add_reading("автора", noun_reading(&[G::Accusative, G::Singular, G::Masculine]));

    a.add_reading("ножницы", noun_reading(&[G::Nominative, G::Plural, G::Plural]));
    a.add_reading("ножницы", noun_reading(&[G::Accusative, G::Plural, G::Plural]));
    by_case_number(
        &mut a,
        "ножницы",
        [
            "ножницы", "ножниц", "ножницам", "ножницы", "ножницами", "ножницах", "ножницы",
            "ножниц", "ножницам", "ножницы", "ножницами", "ножницах",
        ],
    );

    a.add_reading("рога", noun_reading(&[G::Nominative, G::Plural, G::Masculine]));
    a.add_reading("рога", noun_reading(&[G::Genitive, G::Singular, G::Masculine]));

    a.add_reading("стекло", noun_reading(&[G::Nominative, G::Singular, G::Neuter]));
    a.add_reading("стекло", verb_reading(&[G::Past, G::Neuter, G::Singular]));
    by_case_number(
        &mut a,
        "стекло",
        [
            "стекло", "стекла", "стеклу", "стекло", "стеклом", "стекле", "стёкла", "стёкол",
            "стёклам", "стёкла", "стёклами", "стёклах",
        ],
    );

    // Adjectives
    a.add_reading("глупый", adjective_reading(&[G::Nominative, G::Masculine, G::Singular]));
    a.add_reading("глупый", adjective_reading(&[G::Accusative, G::Masculine, G::Singular]));
    adjective(
        &mut a,
        "глупый",
        &[],
        [
            "глупый", "глупого", "глупому", "глупый", "глупым", "глупом", "глупая", "глупой",
            "глупой", "глупую", "глупой", "глупой", "глупое", "глупого", "глупому", "глупое",
            "глупым", "глупом", "глупые", "глупых", "глупым", "глупые", "глупыми", "глупых",
        ],
    );

    a.add_reading("целый", adjective_reading(&[G::Nominative, G::Masculine, G::Singular]));
    adjective(
        &mut a,
        "целый",
        &[],
        [
            "целый", "целого", "целому", "целый", "целым", "целом", "целая", "целой", "целой",
            "целую", "целой", "целой", "целое", "целого", "целому", "целое", "целым", "целом",
            "целые", "целых", "целым", "целые", "целыми", "целых",
        ],
    );

    a.add_reading("добрые", adjective_reading(&[G::Nominative, G::Plural]));
    a.add_reading("добрые", adjective_reading(&[G::Accusative, G::Plural]));

    // Modifiers inside noun groups inflect by case and number only
    a.add_reading("жирная", adjective_reading(&[G::Nominative, G::Feminine, G::Singular]));
    by_case_number(
        &mut a,
        "жирная",
        [
            "жирная", "жирной", "жирной", "жирную", "жирной", "жирной", "жирные", "жирных",
            "жирным", "жирные", "жирными", "жирных",
        ],
    );
    a.add_reading("белая", adjective_reading(&[G::Nominative, G::Feminine, G::Singular]));
    by_case_number(
        &mut a,
        "белая",
        [
            "белая", "белой", "белой", "белую", "белой", "белой", "белые", "белых", "белым",
            "белые", "белыми", "белых",
        ],
    );
    a.add_reading("большие", adjective_reading(&[G::Nominative, G::Plural]));
    by_case_number(
        &mut a,
        "большие",
        [
            "большие", "больших", "большим", "большие", "большими", "больших", "большие",
            "больших", "большим", "большие", "большими", "больших",
        ],
    );
    a.add_reading("оленьи", adjective_reading(&[G::Nominative, G::Plural]));

    // Verbs
    a.add_reading("ударил", verb_reading(&[G::Past, G::Masculine, G::Singular]));
    past(&mut a, "ударил", ["ударил", "ударила", "ударило", "ударили"]);
    personal(
        &mut a,
        "ударил",
        G::Future,
        ["ударю", "ударим", "ударишь", "ударите", "ударит", "ударят"],
    );

    a.add_reading("говорил", verb_reading(&[G::Past, G::Masculine, G::Singular]));
    past(&mut a, "говорил", ["говорил", "говорила", "говорило", "говорили"]);
    personal(
        &mut a,
        "говорил",
        G::Present,
        ["говорю", "говорим", "говоришь", "говорите", "говорит", "говорят"],
    );

    a.add_reading("бежал", verb_reading(&[G::Past, G::Masculine, G::Singular]));
    a.add_reading("бежит", verb_reading(&[G::Present, G::Third, G::Singular]));
    a.add_reading("бежала", verb_reading(&[G::Past, G::Feminine, G::Singular]));
    a.add_reading("бежали", verb_reading(&[G::Past, G::Plural]));

    a.add_reading("ударить", Reading::new(P::Infinitive, &[]));

    // Participles
    a.add_reading(
        "бегущий",
        Reading::new(
            P::Participle,
            &[G::Present, G::Nominative, G::Masculine, G::Singular],
        ),
    );
    a.add_form(
        "бегущий",
        &[G::Present, G::Dative, G::Plural],
        "бегущим",
    );
    a.add_form(
        "бегущий",
        &[G::Past, G::Genitive, G::Feminine, G::Singular],
        "бежавшей",
    );

    a.add_reading(
        "убит",
        Reading::new(P::ShortParticiple, &[G::Past, G::Masculine, G::Singular]),
    );
    past(&mut a, "убит", ["убит", "убита", "убито", "убиты"]);

    a
}

/// A dictionary holding the words most template tests use.
pub fn dictionary() -> Dictionary {
    let analyzer = analyzer();
    let overrides = Overrides::new();
    let factory = WordFactory::new(&analyzer, &overrides);

    let mut dictionary = Dictionary::new();
    for lemma in ["обезьянка", "тень", "глупый", "ударил", "целый", "крыса", "монета"] {
        let word = factory.create(lemma).expect("fixture word builds");
        dictionary.add(word);
    }
    dictionary
}
