use crate::backend::structs::descriptor::Descriptor;
use crate::config::structs::mongo_config::MongoConfig;
use crate::config::structs::pq_config::PqConfig;
use crate::config::structs::redis_config::RedisConfig;
use crate::config::structs::roach_config::RoachConfig;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy)]
pub enum DescriptorRef<'a> {
    redis(&'a Descriptor<RedisConfig>),
    pq(&'a Descriptor<PqConfig>),
    cockroachdb(&'a Descriptor<RoachConfig>),
    mongo(&'a Descriptor<MongoConfig>),
}
