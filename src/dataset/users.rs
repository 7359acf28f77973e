#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

macro_rules! user {
    ($id:expr, $name:expr, $email:expr, $phone:expr) => {
        User {
            id: $id,
            name: $name,
            email: $email,
            phone: $phone,
        }
    };
}

pub const USERS: [User; 30] = [
    user!(1, "Emily Johnson", "emily.johnson@x.dummyjson.com", "+81 965-431-3024"),
    user!(2, "Michael Williams", "michael.williams@x.dummyjson.com", "+49 258-627-6644"),
    user!(3, "Sophia Brown", "sophia.brown@x.dummyjson.com", "+81 210-652-2785"),
    user!(4, "James Davis", "james.davis@x.dummyjson.com", "+49 614-958-9364"),
    user!(5, "Emma Miller", "emma.miller@x.dummyjson.com", "+91 759-776-1614"),
    user!(6, "Olivia Wilson", "olivia.wilson@x.dummyjson.com", "+91 607-295-6448"),
    user!(7, "Alexander Jones", "alexander.jones@x.dummyjson.com", "+61 260-824-4986"),
    user!(8, "Ava Taylor", "ava.taylor@x.dummyjson.com", "+1 458-853-7877"),
    user!(9, "Ethan Martinez", "ethan.martinez@x.dummyjson.com", "+92 933-608-5081"),
    user!(10, "Isabella Anderson", "isabella.anderson@x.dummyjson.com", "+49 770-658-4885"),
    user!(11, "Liam Garcia", "liam.garcia@x.dummyjson.com", "+92 870-217-6201"),
    user!(12, "Mia Rodriguez", "mia.rodriguez@x.dummyjson.com", "+49 989-461-8403"),
    user!(13, "Noah Hernandez", "noah.hernandez@x.dummyjson.com", "+49 393-605-6968"),
    user!(14, "Charlotte Lopez", "charlotte.lopez@x.dummyjson.com", "+44 373-953-5028"),
    user!(15, "William Gonzalez", "william.gonzalez@x.dummyjson.com", "+81 905-252-7319"),
    user!(16, "Avery Perez", "avery.perez@x.dummyjson.com", "+61 731-431-3457"),
    user!(17, "Evelyn Sanchez", "evelyn.sanchez@x.dummyjson.com", "+1 623-880-6871"),
    user!(18, "Logan Torres", "logan.torres@x.dummyjson.com", "+81 507-434-8733"),
    user!(19, "Abigail Rivera", "abigail.rivera@x.dummyjson.com", "+91 228-363-7806"),
    user!(20, "Jackson Evans", "jackson.evans@x.dummyjson.com", "+44 468-628-6686"),
    user!(21, "Madison Collins", "madison.collins@x.dummyjson.com", "+81 259-957-5711"),
    user!(22, "Elijah Stewart", "elijah.stewart@x.dummyjson.com", "+44 468-357-7872"),
    user!(23, "Chloe Morales", "chloe.morales@x.dummyjson.com", "+92 468-541-7133"),
    user!(24, "Mateo Nguyen", "mateo.nguyen@x.dummyjson.com", "+1 341-597-6694"),
    user!(25, "Harper Kelly", "harper.kelly@x.dummyjson.com", "+92 518-863-2863"),
    user!(26, "Evelyn Gonzalez", "evelyn.gonzalez@x.dummyjson.com", "+61 708-508-4638"),
    user!(27, "Daniel Cook", "daniel.cook@x.dummyjson.com", "+44 254-761-6843"),
    user!(28, "Lily Lee", "lily.lee@x.dummyjson.com", "+1 808-757-9867"),
    user!(29, "Henry Hill", "henry.hill@x.dummyjson.com", "+1 240-833-4680"),
    user!(30, "Addison Wright", "addison.wright@x.dummyjson.com", "+1 514-384-3300"),
];
