use mongodb::Database;

#[derive(Clone)]
pub struct MongoUserRepo {
    pub db: Database,
}

#[derive(Clone)]
pub struct MongoExperienceRepo {
    pub db: Database,
}

#[derive(Clone)]
pub struct MongoProjectRepo {
    pub db: Database,
}
