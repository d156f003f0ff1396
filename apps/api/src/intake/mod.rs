// Intake pipeline: upload/paste -> decode -> validate.
// Decoding is a collaborator behind the FileDecoder trait; validation and
// the HTTP handlers are the gate in front of the JD structurer.

pub mod decode;
pub mod handlers;
pub mod validation;
