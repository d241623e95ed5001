/*!
 * Static Swedish to English gloss used for episode descriptions.
 *
 * The descriptions in the source workbook are written in Swedish with most
 * names and many terms already in English. Glossing the common function words
 * and verbs makes them readable without a translation service. Keys are
 * lowercase; matching is case-insensitive.
 */

/// Swedish word or phrase paired with its English gloss
pub type GlossEntry = (&'static str, &'static str);

pub const SWEDISH_TO_ENGLISH: &[GlossEntry] = &[
    // Verbs
    ("berättar", "tells"),
    ("försöker", "tries"),
    ("börjar", "starts/begins"),
    ("slutar", "ends"),
    ("kommer", "comes"),
    ("åker", "goes"),
    ("blir", "becomes/gets"),
    ("säger", "says"),
    ("vill", "wants"),
    ("måste", "must"),
    ("kan", "can"),
    ("får", "gets/receives"),
    ("ger", "gives"),
    ("tar", "takes"),
    ("ser", "sees"),
    ("hör", "hears"),
    ("tycker", "thinks"),
    ("vet", "knows"),
    ("tror", "believes"),
    ("hittar", "finds"),
    ("träffar", "meets"),
    ("frågar", "asks"),
    ("svarar", "answers"),
    ("går", "goes/walks"),
    ("sticker", "leaves/goes"),
    ("skjuter", "shoots"),
    ("dödar", "kills"),
    ("håller", "holds/keeps"),
    ("skulle", "would"),
    // Function words
    ("hemma", "at home"),
    ("hos", "at/with"),
    ("till", "to"),
    ("från", "from"),
    ("med", "with"),
    ("utan", "without"),
    ("för", "for"),
    ("när", "when"),
    ("som", "who/that/which"),
    ("att", "to/that"),
    ("och", "and"),
    ("eller", "or"),
    ("men", "but"),
    ("eftersom", "because"),
    ("därför", "therefore"),
    ("sedan", "then/later"),
    ("bara", "only/just"),
    ("också", "also"),
    ("inte", "not"),
    ("ingen", "no one/none"),
    ("någon", "someone/anyone"),
    ("alla", "everyone/all"),
    ("mycket", "very/much"),
    ("lite", "a little"),
    ("mer", "more"),
    ("hela", "the whole"),
    ("efter", "after"),
    ("under", "during/under"),
    ("över", "over/above"),
    // Phrases
    ("på grund av", "because of"),
    ("tillsammans med", "together with"),
    ("till slut", "finally/in the end"),
    ("precis när", "just when"),
    ("det slutar med att", "it ends with"),
    ("det visar sig att", "it turns out that"),
    ("så att", "so that"),
];
