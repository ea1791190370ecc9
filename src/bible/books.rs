// Abbreviation table for bible book names.
//
// Order matters: the fuzzy lookup takes the first entry whose key contains,
// or is contained in, the cleaned input. Keys are lower-case without spaces
// or periods except where a period is part of a common spelling.

pub static BOOK_MAPPINGS: &[(&str, &str)] = &[
    // Genesis
    ("1mo", "1. Mose"),
    ("1.mo", "1. Mose"),
    ("1mose", "1. Mose"),
    ("1.mose", "1. Mose"),
    ("gen", "Genesis"),
    ("genesis", "Genesis"),
    // Exodus
    ("2mo", "2. Mose"),
    ("2.mo", "2. Mose"),
    ("2mose", "2. Mose"),
    ("2.mose", "2. Mose"),
    ("ex", "Exodus"),
    ("exodus", "Exodus"),
    // Johannes-Evangelium
    ("joh", "Johannes"),
    ("joh.", "Johannes"),
    ("johannes", "Johannes"),
    ("john", "John"),
    // 1. Johannes
    ("1joh", "1. Johannes"),
    ("1.joh", "1. Johannes"),
    ("1.johannes", "1. Johannes"),
    ("1johannes", "1. Johannes"),
    ("1john", "1 John"),
    // 2. Johannes
    ("2joh", "2. Johannes"),
    ("2.joh", "2. Johannes"),
    ("2.johannes", "2. Johannes"),
    ("2johannes", "2. Johannes"),
    ("2john", "2 John"),
    // 3. Johannes
    ("3joh", "3. Johannes"),
    ("3.joh", "3. Johannes"),
    ("3.johannes", "3. Johannes"),
    ("3johannes", "3. Johannes"),
    ("3john", "3 John"),
    // Evangelien, Apostelgeschichte, Briefe
    ("mt", "Matthäus"),
    ("matt", "Matthäus"),
    ("matthäus", "Matthäus"),
    ("matthew", "Matthew"),
    ("mk", "Markus"),
    ("markus", "Markus"),
    ("mark", "Mark"),
    ("lk", "Lukas"),
    ("lukas", "Lukas"),
    ("luke", "Luke"),
    ("apg", "Apostelgeschichte"),
    ("acts", "Acts"),
    ("röm", "Römer"),
    ("roemer", "Römer"),
    ("rom", "Römer"),
    ("romans", "Romans"),
    ("1kor", "1. Korinther"),
    ("1.kor", "1. Korinther"),
    ("1cor", "1 Corinthians"),
    ("2kor", "2. Korinther"),
    ("2.kor", "2. Korinther"),
    ("2cor", "2 Corinthians"),
    ("gal", "Galater"),
    ("galater", "Galater"),
    ("galatians", "Galatians"),
    ("eph", "Epheser"),
    ("epheser", "Epheser"),
    ("ephesians", "Ephesians"),
    ("phil", "Philipper"),
    ("philipper", "Philipper"),
    ("philippians", "Philippians"),
    ("kol", "Kolosser"),
    ("kolosser", "Kolosser"),
    ("col", "Colossians"),
    ("1thess", "1. Thessalonicher"),
    ("1.thess", "1. Thessalonicher"),
    ("2thess", "2. Thessalonicher"),
    ("2.thess", "2. Thessalonicher"),
    ("1tim", "1. Timotheus"),
    ("1.tim", "1. Timotheus"),
    ("2tim", "2. Timotheus"),
    ("2.tim", "2. Timotheus"),
    ("tit", "Titus"),
    ("titus", "Titus"),
    ("phlm", "Philemon"),
    ("philemon", "Philemon"),
    ("hebr", "Hebräer"),
    ("heb", "Hebräer"),
    ("hebrews", "Hebrews"),
    ("jak", "Jakobus"),
    ("jakobus", "Jakobus"),
    ("james", "James"),
    ("1petr", "1. Petrus"),
    ("1.petr", "1. Petrus"),
    ("1pet", "1 Peter"),
    ("2petr", "2. Petrus"),
    ("2.petr", "2. Petrus"),
    ("2pet", "2 Peter"),
    ("jud", "Judas"),
    ("judas", "Judas"),
    ("jude", "Jude"),
    ("offb", "Offenbarung"),
    ("offenbarung", "Offenbarung"),
    ("rev", "Revelation"),
    // Altes Testament
    ("ps", "Psalm"),
    ("psalm", "Psalm"),
    ("psalms", "Psalms"),
    ("spr", "Sprüche"),
    ("sprueche", "Sprüche"),
    ("prov", "Proverbs"),
    ("pred", "Prediger"),
    ("prediger", "Prediger"),
    ("eccl", "Ecclesiastes"),
    ("jes", "Jesaja"),
    ("jesaja", "Jesaja"),
    ("isa", "Isaiah"),
    ("jer", "Jeremia"),
    ("jeremia", "Jeremia"),
    ("jeremiah", "Jeremiah"),
    ("hes", "Hesekiel"),
    ("hesekiel", "Hesekiel"),
    ("ezek", "Ezekiel"),
    ("dan", "Daniel"),
    ("daniel", "Daniel"),
];

/// Exact lookup of an already cleaned key.
pub fn lookup_exact(key: &str) -> Option<&'static str> {
    BOOK_MAPPINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// First entry whose key contains `cleaned` or is contained in it.
pub fn lookup_fuzzy(cleaned: &str) -> Option<&'static str> {
    if cleaned.is_empty() {
        return None;
    }
    BOOK_MAPPINGS
        .iter()
        .find(|(k, _)| k.contains(cleaned) || cleaned.contains(k))
        .map(|(_, v)| *v)
}
