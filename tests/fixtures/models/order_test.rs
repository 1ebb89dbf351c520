// Test module fixture - must never be treated as a model file
pub struct OrderFixture {
    pub id: i64,
}
