use color_eyre::Result;
use eyre::WrapErr;
use rusqlite::params;
use super::Pool;

/**
 * Table creation and the demo content set. The demo rows
 * double as the fixture for every test in the crate, so
 * the numbers in here (votes, timestamps, who commented
 * where) are load-bearing. Don't reshuffle them casually.
 */

const CREATE_TABLES_SQL: &'static str = "
  CREATE TABLE IF NOT EXISTS topics (
    slug TEXT PRIMARY KEY,
    description TEXT NOT NULL
  );
  CREATE TABLE IF NOT EXISTS users (
    username TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    avatar_url TEXT NOT NULL
  );
  CREATE TABLE IF NOT EXISTS articles (
    article_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL REFERENCES users (username),
    body TEXT NOT NULL,
    topic TEXT NOT NULL REFERENCES topics (slug),
    created_at INTEGER NOT NULL,
    votes INTEGER NOT NULL DEFAULT 0
  );
  CREATE TABLE IF NOT EXISTS comments (
    comment_id INTEGER PRIMARY KEY AUTOINCREMENT,
    body TEXT NOT NULL,
    author TEXT NOT NULL REFERENCES users (username),
    article_id INTEGER NOT NULL REFERENCES articles (article_id),
    votes INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER NOT NULL
  );
";

// Children first or the foreign keys complain.
const DROP_TABLES_SQL: &'static str = "
  DROP TABLE IF EXISTS comments;
  DROP TABLE IF EXISTS articles;
  DROP TABLE IF EXISTS users;
  DROP TABLE IF EXISTS topics;
";

// (slug, description) - gardening deliberately has no
// articles so the empty-topic case stays testable.
const DEMO_TOPICS: [(&'static str, &'static str); 3] = [
  ("coding", "All things careful and automatic"),
  ("cooking", "Burnt things and how to avoid them"),
  ("gardening", "Growing things in dirt")
];

// (username, name, avatar_url) - night_reader never
// wrote an article, only comments.
const DEMO_USERS: [(&'static str, &'static str, &'static str); 4] = [
  ("moss_witch", "Ingrid Vale", "https://avatars.example.net/moss_witch.png"),
  ("tab_hoarder", "Denis Park", "https://avatars.example.net/tab_hoarder.png"),
  ("sourdough_sam", "Sam Leclerc", "https://avatars.example.net/sourdough_sam.png"),
  ("night_reader", "Priya Nand", "https://avatars.example.net/night_reader.png")
];

// (title, author, topic, body, created_at, votes).
// Insert order assigns article_id 1 to 5 on a fresh
// database. Articles 3 and 4 share a created_at on
// purpose, that's the tie-break fixture.
const DEMO_ARTICLES: [(&'static str, &'static str, &'static str, &'static str, i64, i64); 5] = [
  (
    "Borrow checker survival notes",
    "moss_witch",
    "coding",
    "Rule one: stop fighting it and draw the ownership on paper first. \
     Rule two: you will not follow rule one.",
    1700000000,
    0
  ),
  (
    "Fermentation for the impatient",
    "sourdough_sam",
    "cooking",
    "Everything in this post takes three days minimum, which for \
     fermentation counts as instant gratification.",
    1710000000,
    0
  ),
  (
    "Beige terminals forever",
    "tab_hoarder",
    "coding",
    "An ode to color schemes that look like old paper and never \
     change out from under you.",
    1720000000,
    25
  ),
  (
    "Stock from scraps",
    "sourdough_sam",
    "cooking",
    "Your freezer wants onion skins and chicken bones. This is the \
     whole recipe, honestly.",
    1720000000,
    7
  ),
  (
    "Shortcuts I refuse to learn",
    "moss_witch",
    "coding",
    "A list of keybindings I have looked up at least forty times \
     each and will look up again tomorrow.",
    1730000000,
    -3
  )
];

// (article_id, author, body, votes, created_at).
// Comment 1 sits at 16 votes, comments 3 and 4 share a
// created_at. Articles 2 and 5 stay commentless.
const DEMO_COMMENTS: [(i64, &'static str, &'static str, i64, i64); 6] = [
  (1, "tab_hoarder", "Tried this and broke everything, ten out of ten.", 16, 1701000000),
  (1, "sourdough_sam", "Came for the lifetimes, stayed for the error messages.", 0, 1702000000),
  (1, "night_reader", "Lurking as usual but this one deserved a comment.", 3, 1703000000),
  (1, "moss_witch", "Author here. I regret the title.", -2, 1703000000),
  (3, "night_reader", "Beige is a lifestyle.", 1, 1721000000),
  (4, "tab_hoarder", "My freezer is now eighty percent stock.", 0, 1721500000)
];

pub fn create_all_tables(pool: &Pool) -> Result<()> {
  let conn = pool.clone().get()?;
  conn.execute_batch(CREATE_TABLES_SQL)
    .context("Creating database tables")
}

pub fn drop_all_tables(pool: &Pool) -> Result<()> {
  let conn = pool.clone().get()?;
  conn.execute_batch(DROP_TABLES_SQL)
    .context("Dropping database tables")
}

// Not idempotent: seeding twice trips the primary keys.
// The seed binary drops the tables first when asked to.
pub fn seed_demo_data(pool: &Pool) -> Result<()> {
  let mut conn = pool.clone().get()?;
  let tx = conn.transaction()?;
  for topic in DEMO_TOPICS.iter() {
    tx.execute(
      "INSERT INTO topics (slug, description) VALUES (?, ?)",
      params![topic.0, topic.1]
    )?;
  }
  for user in DEMO_USERS.iter() {
    tx.execute(
      "INSERT INTO users (username, name, avatar_url) VALUES (?, ?, ?)",
      params![user.0, user.1, user.2]
    )?;
  }
  for article in DEMO_ARTICLES.iter() {
    tx.execute(
      "INSERT INTO articles (title, author, topic, body, created_at, votes) \
       VALUES (?, ?, ?, ?, ?, ?)",
      params![article.0, article.1, article.2, article.3, article.4, article.5]
    )?;
  }
  for comment in DEMO_COMMENTS.iter() {
    tx.execute(
      "INSERT INTO comments (article_id, author, body, votes, created_at) \
       VALUES (?, ?, ?, ?, ?)",
      params![comment.0, comment.1, comment.2, comment.3, comment.4]
    )?;
  }
  tx.commit().context("Committing demo data")
}
