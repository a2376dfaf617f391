mod prediction_properties;
