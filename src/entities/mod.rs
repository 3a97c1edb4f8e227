//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod admin;
pub mod customer;
pub mod employee;
pub mod enquiry;
pub mod fabric;
pub mod invoice;
pub mod order;
pub mod readymade_product;
pub mod sale;
pub mod session;
pub mod status;
pub mod vendor;
pub mod vendor_payment;

// Re-export specific types to avoid conflicts
pub use admin::{Column as AdminColumn, Entity as Admin, Model as AdminModel};
pub use customer::{Column as CustomerColumn, Entity as Customer, Model as CustomerModel};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use enquiry::{Column as EnquiryColumn, Entity as Enquiry, Model as EnquiryModel};
pub use fabric::{Column as FabricColumn, Entity as Fabric, Model as FabricModel};
pub use invoice::{Column as InvoiceColumn, Entity as Invoice, Model as InvoiceModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use readymade_product::{
    Column as ReadymadeProductColumn, Entity as ReadymadeProduct, Model as ReadymadeProductModel,
};
pub use sale::{Column as SaleColumn, Entity as Sale, Model as SaleModel};
pub use session::{Column as SessionColumn, Entity as Session, Model as SessionModel};
pub use status::{InvoiceStatus, OrderStatus, PaymentStatus};
pub use vendor::{Column as VendorColumn, Entity as Vendor, Model as VendorModel};
pub use vendor_payment::{
    Column as VendorPaymentColumn, Entity as VendorPayment, Model as VendorPaymentModel,
};
