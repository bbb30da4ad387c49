//! Embedded word lists, grouped by language and difficulty (1 = easiest).

pub const ENGLISH: [(&str, u8); 25] = [
    ("cat", 1),
    ("dog", 1),
    ("sun", 1),
    ("book", 1),
    ("tree", 1),
    ("garden", 2),
    ("window", 2),
    ("planet", 2),
    ("bridge", 2),
    ("summer", 2),
    ("elephant", 3),
    ("mountain", 3),
    ("kitchen", 3),
    ("blanket", 3),
    ("whistle", 3),
    ("rhythm", 4),
    ("jukebox", 4),
    ("zephyr", 4),
    ("oxygen", 4),
    ("sphinx", 4),
    ("quizzical", 5),
    ("xylophone", 5),
    ("buzzword", 5),
    ("jazziest", 5),
    ("gazebo", 5),
];

pub const FRENCH: [(&str, u8); 20] = [
    ("chat", 1),
    ("maison", 1),
    ("pain", 1),
    ("livre", 1),
    ("jardin", 2),
    ("fenetre", 2),
    ("soleil", 2),
    ("fromage", 2),
    ("montagne", 3),
    ("papillon", 3),
    ("bouteille", 3),
    ("chocolat", 3),
    ("grenouille", 4),
    ("ecureuil", 4),
    ("citrouille", 4),
    ("parapluie", 4),
    ("kiwi", 5),
    ("whisky", 5),
    ("zygote", 5),
    ("byzantin", 5),
];

pub const GERMAN: [(&str, u8); 20] = [
    ("haus", 1),
    ("baum", 1),
    ("hund", 1),
    ("katze", 1),
    ("garten", 2),
    ("fenster", 2),
    ("sommer", 2),
    ("schule", 2),
    ("schmetterling", 3),
    ("kuchen", 3),
    ("flasche", 3),
    ("wolke", 3),
    ("eichhörnchen", 4),
    ("kürbis", 4),
    ("regenschirm", 4),
    ("bücher", 4),
    ("quarz", 5),
    ("xylofon", 5),
    ("jazz", 5),
    ("pfütze", 5),
];

pub const SPANISH: [(&str, u8); 20] = [
    ("casa", 1),
    ("perro", 1),
    ("gato", 1),
    ("libro", 1),
    ("jardin", 2),
    ("ventana", 2),
    ("verano", 2),
    ("escuela", 2),
    ("montaña", 3),
    ("mariposa", 3),
    ("botella", 3),
    ("chocolate", 3),
    ("murciélago", 4),
    ("calabaza", 4),
    ("paraguas", 4),
    ("pingüino", 4),
    ("kiwi", 5),
    ("whisky", 5),
    ("xilófono", 5),
    ("zigzag", 5),
];
