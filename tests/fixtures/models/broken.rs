// Broken fixture - missing comma and closing brace
pub struct Broken {
    pub id: i64
    pub name: String
